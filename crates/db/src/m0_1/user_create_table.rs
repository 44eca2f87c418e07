use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::User;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(User::Table)
        .col(
            ColumnDef::new(User::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(User::Email)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(
            ColumnDef::new(User::Pseudo)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(ColumnDef::new(User::Password).string().not_null())
        .col(
            ColumnDef::new(User::Role)
                .string()
                .not_null()
                .string_len(15)
                .default("user"),
        )
        .col(ColumnDef::new(User::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(User::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(User::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
