use std::{path::PathBuf, str::FromStr};

use akkor_shared::user::{Actor, Role};
use akkor_user::RegisterInput;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<akkor_shared::State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_string_lossy()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    akkor_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(akkor_shared::State {
        read_db: pool.clone(),
        write_db: pool,
    })
}

#[allow(dead_code)]
pub async fn create_user(
    state: &akkor_shared::State,
    name: impl Into<String>,
    role: Role,
) -> anyhow::Result<Actor> {
    let name = name.into();
    let command = akkor_user::Command::new(state.clone());
    let id = command
        .create(
            RegisterInput {
                pseudo: name.to_owned(),
                email: format!("{name}@akkor.localhost"),
                password: "my_password".to_owned(),
            },
            role,
        )
        .await?;

    Ok(Actor::new(id, role))
}
