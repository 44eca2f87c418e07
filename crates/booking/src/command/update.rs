use akkor_db::table::Booking;
use akkor_shared::{booking::BookingStatus, user::Actor};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::Date;

#[derive(Default)]
pub struct UpdateInput {
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub status: Option<BookingStatus>,
}

impl super::Command {
    pub async fn update(
        &self,
        actor: &Actor,
        id: i64,
        input: UpdateInput,
    ) -> akkor_shared::Result<()> {
        let Some(booking) = crate::Query(self.0.clone()).find(id).await? else {
            akkor_shared::not_found!("Booking {id}");
        };

        if !crate::can_manage(actor, booking.user_id) {
            akkor_shared::forbidden!();
        }

        let current = (booking.check_in_date()?, booking.check_out_date()?);
        let (check_in, check_out) = crate::validate_updated_stay(
            current,
            input.check_in,
            input.check_out,
            akkor_shared::today(),
        )?;

        let mut statement = Query::update()
            .table(Booking::Table)
            .value(Booking::CheckIn, akkor_shared::format_date(check_in))
            .value(Booking::CheckOut, akkor_shared::format_date(check_out))
            .value(Booking::UpdatedAt, akkor_shared::now())
            .and_where(Expr::col(Booking::Id).eq(id))
            .to_owned();

        if let Some(status) = input.status {
            statement.value(Booking::Status, status.to_string());
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(booking_id = id, actor_id = actor.id, "booking updated");

        Ok(())
    }
}
