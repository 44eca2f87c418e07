use validator::Validate;

use crate::{UserView, password, repository};

#[derive(Validate)]
pub struct LoginInput {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl super::Command {
    pub async fn verify_credentials(&self, input: LoginInput) -> akkor_shared::Result<UserView> {
        input.validate()?;

        let email = input.email.trim().to_lowercase();
        let Some(user) =
            repository::find(&self.read_db, repository::FindType::Email(email)).await?
        else {
            akkor_shared::user!("Invalid email or password");
        };

        if !password::verify_password(&input.password, &user.password)? {
            tracing::debug!(user_id = user.id, "password mismatch");
            akkor_shared::user!("Invalid email or password");
        }

        Ok(user.into())
    }
}
