use akkor_db::table::Booking;
use akkor_shared::user::Actor;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    pub async fn delete(&self, actor: &Actor, id: i64) -> akkor_shared::Result<()> {
        let Some(booking) = crate::Query(self.0.clone()).find(id).await? else {
            akkor_shared::not_found!("Booking {id}");
        };

        if !crate::can_manage(actor, booking.user_id) {
            akkor_shared::forbidden!();
        }

        let statement = Query::delete()
            .from_table(Booking::Table)
            .and_where(Expr::col(Booking::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(booking_id = id, actor_id = actor.id, "booking deleted");

        Ok(())
    }
}
