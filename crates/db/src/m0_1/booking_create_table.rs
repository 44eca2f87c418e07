use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Booking, Hotel, User};

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Booking::Table)
        .col(
            ColumnDef::new(Booking::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Booking::UserId).integer().not_null())
        .col(ColumnDef::new(Booking::HotelId).integer().not_null())
        .col(
            ColumnDef::new(Booking::CheckIn)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(Booking::CheckOut)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(Booking::Status)
                .string()
                .not_null()
                .string_len(15)
                .default("pending"),
        )
        .col(ColumnDef::new(Booking::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Booking::UpdatedAt).big_integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_booking_user")
                .from(Booking::Table, Booking::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_booking_hotel")
                .from(Booking::Table, Booking::HotelId)
                .to(Hotel::Table, Hotel::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Booking::Table).to_owned()
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
