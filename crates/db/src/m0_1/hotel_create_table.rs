use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Hotel;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Hotel::Table)
        .col(
            ColumnDef::new(Hotel::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Hotel::Name)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(
            ColumnDef::new(Hotel::Location)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(ColumnDef::new(Hotel::Description).text().not_null())
        .col(
            ColumnDef::new(Hotel::PictureList)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(ColumnDef::new(Hotel::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Hotel::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Hotel::Table).to_owned()
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
