pub struct Operation;

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        sqlx::query(r#"CREATE UNIQUE INDEX "uk_user_email" on "user" ("email" COLLATE NOCASE)"#)
            .execute(connection)
            .await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        sqlx::query(r#"DROP INDEX "uk_user_email""#)
            .execute(connection)
            .await?;

        Ok(())
    }
}
