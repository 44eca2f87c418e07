use std::{path::PathBuf, str::FromStr};

use akkor_booking::CreateInput;
use akkor_shared::user::{Actor, Role};
use akkor_user::RegisterInput;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use time::{Date, Duration};

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
pub fn in_days(days: i64) -> Date {
    akkor_shared::today() + Duration::days(days)
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
pub async fn create_hotel(
    state: &akkor_shared::State,
    admin: &Actor,
    name: &str,
) -> anyhow::Result<i64> {
    let id = akkor_hotel::Command::new(state.clone())
        .create(
            admin,
            akkor_hotel::CreateInput {
                name: name.to_owned(),
                location: "Paris, France".to_owned(),
                description: format!("{name} description"),
                picture_list: vec![],
            },
        )
        .await?;

    Ok(id)
}

#[allow(dead_code)]
pub async fn create_booking(
    state: &akkor_shared::State,
    actor: &Actor,
    hotel_id: i64,
    from: i64,
    to: i64,
) -> anyhow::Result<i64> {
    let id = akkor_booking::Command::new(state.clone())
        .create(
            actor,
            CreateInput {
                hotel_id,
                check_in: in_days(from),
                check_out: in_days(to),
            },
        )
        .await?;

    Ok(id)
}

/// Moves a stay into the past, which the commands themselves never allow.
#[allow(dead_code)]
pub async fn backdate(
    state: &akkor_shared::State,
    booking_id: i64,
    from: i64,
    to: i64,
) -> anyhow::Result<()> {
    sqlx::query("UPDATE booking SET check_in = ?, check_out = ? WHERE id = ?")
        .bind(akkor_shared::format_date(in_days(from)))
        .bind(akkor_shared::format_date(in_days(to)))
        .bind(booking_id)
        .execute(&state.write_db)
        .await?;

    Ok(())
}
