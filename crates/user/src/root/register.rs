use akkor_shared::user::Role;
use validator::Validate;

use crate::{password, repository};

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(length(
        min = 3,
        max = 255,
        message = "Pseudo must be between 3 and 255 characters"
    ))]
    pub pseudo: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(
        min = 8,
        max = 255,
        message = "Password must be between 8 and 255 characters"
    ))]
    pub password: String,
}

impl RegisterInput {
    fn normalize(self) -> Self {
        Self {
            pseudo: self.pseudo.trim().to_owned(),
            email: self.email.trim().to_lowercase(),
            password: self.password,
        }
    }
}

impl super::Command {
    /// Self-service sign up, always with the `user` role.
    pub async fn register(&self, input: RegisterInput) -> akkor_shared::Result<i64> {
        self.create(input, Role::User).await
    }

    /// Account creation for operators (seeding, bootstrap admin).
    pub async fn create(&self, input: RegisterInput, role: Role) -> akkor_shared::Result<i64> {
        let input = input.normalize();
        input.validate()?;

        if repository::email_taken(&self.read_db, &input.email, None).await? {
            akkor_shared::user!("Email already taken");
        }

        let password = password::hash_password(&input.password)?;
        let id = repository::create(
            &self.write_db,
            repository::CreateInput {
                email: input.email.to_owned(),
                pseudo: input.pseudo,
                password,
                role,
            },
        )
        .await?;

        tracing::info!(user_id = id, email = %input.email, role = %role, "user created");

        Ok(id)
    }
}
