use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use std::{str::FromStr, time::Duration};

/// Connection options shared by every pool.
///
/// Pragmas are set on the options rather than run once against the pool so
/// that every connection gets them, foreign keys in particular.
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .pragma("cache_size", "-20000")
        .pragma("temp_store", "memory"))
}

/// Create a read-only connection pool for concurrent reads.
///
/// The database must already exist, so build the write pool first.
pub async fn create_read_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = connect_options(database_url)?.read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(max_connections, "Created read-only pool");

    Ok(pool)
}

/// Create the read-write pool.
///
/// Limited to a single connection so writers never race for the lock.
pub async fn create_write_pool(database_url: &str) -> Result<SqlitePool> {
    let options = connect_options(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    tracing::info!("Created read-write pool with 1 max connection");

    Ok(pool)
}

/// Both pools wired into the state the domain crates expect.
pub async fn create_state(database_url: &str, max_connections: u32) -> Result<akkor_shared::State> {
    let write_db = create_write_pool(database_url).await?;
    let read_db = create_read_pool(database_url, max_connections).await?;

    Ok(akkor_shared::State { read_db, write_db })
}

/// Apply every pending schema migration.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    use sqlx_migrator::{Migrate, Plan};

    let migrator = akkor_db::migrator()?;
    let mut conn = pool.acquire().await?;
    migrator.run(&mut *conn, &Plan::apply_all()).await?;

    tracing::info!("Database migrations applied");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pools_share_one_database() -> Result<()> {
        let dir = temp_dir::TempDir::new()?;
        let url = format!("sqlite:{}", dir.child("db.sqlite3").display());

        let state = create_state(&url, 2).await?;
        migrate(&state.write_db).await?;

        sqlx::query("INSERT INTO hotel (name, location, description, picture_list, created_at, updated_at) VALUES ('a', 'b', 'c', '[]', 0, 0)")
            .execute(&state.write_db)
            .await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hotel")
            .fetch_one(&state.read_db)
            .await?;
        assert_eq!(count, 1);

        let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&state.read_db)
            .await?;
        assert_eq!(enabled, 1);

        let write = sqlx::query("DELETE FROM hotel").execute(&state.read_db).await;
        assert!(write.is_err(), "read pool must reject writes");

        Ok(())
    }
}
