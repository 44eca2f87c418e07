use akkor::config::Config;
use clap::ValueEnum;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Role {
    User,
    Employee,
    Admin,
}

impl From<Role> for akkor_shared::user::Role {
    fn from(value: Role) -> Self {
        match value {
            Role::User => akkor_shared::user::Role::User,
            Role::Employee => akkor_shared::user::Role::Employee,
            Role::Admin => akkor_shared::user::Role::Admin,
        }
    }
}

pub async fn set_role(config: &Config, email: String, role: Role) -> anyhow::Result<()> {
    let pool = akkor::db::create_write_pool(&config.database.url).await?;
    let command = akkor_user::Command::new(akkor_shared::State {
        read_db: pool.clone(),
        write_db: pool.clone(),
    });

    let role = akkor_shared::user::Role::from(role);
    let id = command.set_role(&email, role).await?;

    tracing::info!(user_id = id, %email, %role, "Role updated");

    pool.close().await;

    Ok(())
}
