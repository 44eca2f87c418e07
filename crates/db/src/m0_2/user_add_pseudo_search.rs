use sea_query::{ColumnDef, Expr, ExprTrait, Query, SqliteQueryBuilder, Table};
use sea_query_sqlx::SqlxBinder;

use crate::table::User;

/// Lowercased copy of `pseudo` for guest searches. Emails are already
/// stored lowercased.
pub struct Operation;

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Table::alter()
            .table(User::Table)
            .add_column(ColumnDef::new(User::PseudoSearch).string().not_null().default(""))
            .to_string(SqliteQueryBuilder);
        sqlx::query(&statement).execute(&mut *connection).await?;

        let statement = Query::select()
            .columns([User::Id, User::Pseudo])
            .from(User::Table)
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let users = sqlx::query_as_with::<_, (i64, String), _>(&sql, values)
            .fetch_all(&mut *connection)
            .await?;

        for (id, pseudo) in users {
            let statement = Query::update()
                .table(User::Table)
                .value(User::PseudoSearch, pseudo.to_lowercase())
                .and_where(Expr::col(User::Id).eq(id))
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
        let statement = Table::alter()
            .table(User::Table)
            .drop_column(User::PseudoSearch)
            .to_string(SqliteQueryBuilder);
        sqlx::query(&statement).execute(&mut *connection).await?;

        Ok(())
    }
}
