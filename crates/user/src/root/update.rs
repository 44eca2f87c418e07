use akkor_shared::user::Actor;
use validator::Validate;

use crate::{password, repository};

/// Partial update: `None` keeps the stored value.
#[derive(Validate, Default)]
pub struct UpdateInput {
    #[validate(length(
        min = 3,
        max = 255,
        message = "Pseudo must be between 3 and 255 characters"
    ))]
    pub pseudo: Option<String>,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(
        min = 8,
        max = 255,
        message = "Password must be between 8 and 255 characters"
    ))]
    pub password: Option<String>,
}

impl UpdateInput {
    fn normalize(self) -> Self {
        Self {
            pseudo: self.pseudo.map(|p| p.trim().to_owned()),
            email: self.email.map(|e| e.trim().to_lowercase()),
            password: self.password,
        }
    }
}

impl super::Command {
    pub async fn update(
        &self,
        actor: &Actor,
        id: i64,
        input: UpdateInput,
    ) -> akkor_shared::Result<()> {
        if !actor.can_manage_user(id) {
            akkor_shared::forbidden!();
        }

        let input = input.normalize();
        input.validate()?;

        if repository::find(&self.read_db, repository::FindType::Id(id))
            .await?
            .is_none()
        {
            akkor_shared::not_found!("User {id}");
        }

        if let Some(email) = &input.email {
            if repository::email_taken(&self.read_db, email, Some(id)).await? {
                akkor_shared::user!("Email already taken");
            }
        }

        let password = match input.password {
            Some(password) => Some(password::hash_password(&password)?),
            None => None,
        };

        repository::update(
            &self.write_db,
            repository::UpdateInput {
                id,
                email: input.email,
                pseudo: input.pseudo,
                password,
                role: None,
            },
        )
        .await?;

        tracing::info!(user_id = id, actor_id = actor.id, "user updated");

        Ok(())
    }
}
