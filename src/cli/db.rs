use anyhow::Result;
use akkor::config::Config;
use sqlx::migrate::MigrateDatabase;

pub async fn migrate(config: &Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!(url = %config.database.url, "Database does not exist, creating");
        sqlx::Sqlite::create_database(&config.database.url).await?;
    }

    let pool = akkor::db::create_write_pool(&config.database.url).await?;
    akkor::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drops the database if it exists, then migrates a fresh one.
pub async fn reset(config: &Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!(url = %config.database.url, "Dropping existing database");
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
