use akkor_shared::user::Role;

use crate::repository;

impl super::Command {
    pub async fn set_role(&self, email: &str, role: Role) -> akkor_shared::Result<i64> {
        let email = email.trim().to_lowercase();
        let Some(user) =
            repository::find(&self.read_db, repository::FindType::Email(email.to_owned())).await?
        else {
            akkor_shared::not_found!("User {email}");
        };

        repository::update(
            &self.write_db,
            repository::UpdateInput {
                id: user.id,
                role: Some(role),
                ..Default::default()
            },
        )
        .await?;

        tracing::info!(user_id = user.id, role = %role, "role changed");

        Ok(user.id)
    }
}
