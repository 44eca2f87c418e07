use akkor_db::table::Hotel;
use akkor_shared::user::Actor;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Bookings of the hotel go with it through the foreign key cascade.
    pub async fn delete(&self, actor: &Actor, id: i64) -> akkor_shared::Result<()> {
        if !actor.is_admin() {
            akkor_shared::forbidden!();
        }

        let statement = Query::delete()
            .from_table(Hotel::Table)
            .and_where(Expr::col(Hotel::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            akkor_shared::not_found!("Hotel {id}");
        }

        tracing::info!(hotel_id = id, actor_id = actor.id, "hotel deleted");

        Ok(())
    }
}
