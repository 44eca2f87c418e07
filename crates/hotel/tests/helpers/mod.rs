use std::{path::PathBuf, str::FromStr};

use akkor_hotel::CreateInput;
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
    name: &str,
    role: Role,
) -> anyhow::Result<Actor> {
    let id = akkor_user::Command::new(state.clone())
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

#[allow(dead_code)]
pub async fn create_hotels(
    state: &akkor_shared::State,
    admin: &Actor,
    hotels: impl IntoIterator<Item = (&'static str, &'static str)>,
) -> anyhow::Result<Vec<i64>> {
    let command = akkor_hotel::Command::new(state.clone());

    let mut ids = vec![];
    for (name, location) in hotels {
        let id = command
            .create(
                admin,
                CreateInput {
                    name: name.to_owned(),
                    location: location.to_owned(),
                    description: format!("{name} in {location}"),
                    picture_list: vec![],
                },
            )
            .await?;
        ids.push(id);
    }

    Ok(ids)
}
