use sea_query::{ColumnDef, Expr, ExprTrait, Query, SqliteQueryBuilder, Table};
use sea_query_sqlx::SqlxBinder;

use crate::table::Hotel;

/// Lowercased copies of `name` and `location`. SQLite `LIKE` only folds
/// ASCII, so searches match against these instead.
pub struct Operation;

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        for column in [Hotel::NameSearch, Hotel::LocationSearch] {
            let statement = Table::alter()
                .table(Hotel::Table)
                .add_column(ColumnDef::new(column).string().not_null().default(""))
                .to_string(SqliteQueryBuilder);
            sqlx::query(&statement).execute(&mut *connection).await?;
        }

        let statement = Query::select()
            .columns([Hotel::Id, Hotel::Name, Hotel::Location])
            .from(Hotel::Table)
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let hotels = sqlx::query_as_with::<_, (i64, String, String), _>(&sql, values)
            .fetch_all(&mut *connection)
            .await?;

        for (id, name, location) in hotels {
            let statement = Query::update()
                .table(Hotel::Table)
                .value(Hotel::NameSearch, name.to_lowercase())
                .value(Hotel::LocationSearch, location.to_lowercase())
                .and_where(Expr::col(Hotel::Id).eq(id))
                .to_owned();
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values)
                .execute(&mut *connection)
                .await?;
        }

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        for column in [Hotel::NameSearch, Hotel::LocationSearch] {
            let statement = Table::alter()
                .table(Hotel::Table)
                .drop_column(column)
                .to_string(SqliteQueryBuilder);
            sqlx::query(&statement).execute(&mut *connection).await?;
        }

        Ok(())
    }
}
