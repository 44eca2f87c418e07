use akkor_shared::user::Actor;

use crate::repository;

impl super::Command {
    /// Bookings of the account go with it through the foreign key cascade.
    pub async fn delete(&self, actor: &Actor, id: i64) -> akkor_shared::Result<()> {
        if !actor.can_manage_user(id) {
            akkor_shared::forbidden!();
        }

        if repository::find(&self.read_db, repository::FindType::Id(id))
            .await?
            .is_none()
        {
            akkor_shared::not_found!("User {id}");
        }

        repository::delete(&self.write_db, id).await?;

        tracing::info!(user_id = id, actor_id = actor.id, "user deleted");

        Ok(())
    }
}
