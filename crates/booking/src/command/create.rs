use akkor_db::table::{Booking, Hotel};
use akkor_shared::{booking::BookingStatus, user::Actor};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::Date;

pub struct CreateInput {
    pub hotel_id: i64,
    pub check_in: Date,
    pub check_out: Date,
}

impl super::Command {
    /// Books a stay for the actor. Dates are checked before the hotel so a
    /// bad range is reported even for a stale hotel id.
    pub async fn create(&self, actor: &Actor, input: CreateInput) -> akkor_shared::Result<i64> {
        crate::validate_new_stay(input.check_in, input.check_out, akkor_shared::today())?;

        let statement = Query::select()
            .column(Hotel::Id)
            .from(Hotel::Table)
            .and_where(Expr::col(Hotel::Id).eq(input.hotel_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let hotel = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        if hotel.is_none() {
            akkor_shared::not_found!("Hotel {}", input.hotel_id);
        }

        let now = akkor_shared::now();
        let statement = Query::insert()
            .into_table(Booking::Table)
            .columns([
                Booking::UserId,
                Booking::HotelId,
                Booking::CheckIn,
                Booking::CheckOut,
                Booking::Status,
                Booking::CreatedAt,
                Booking::UpdatedAt,
            ])
            .values_panic([
                actor.id.into(),
                input.hotel_id.into(),
                akkor_shared::format_date(input.check_in).into(),
                akkor_shared::format_date(input.check_out).into(),
                BookingStatus::Confirmed.to_string().into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(
            booking_id = id,
            hotel_id = input.hotel_id,
            user_id = actor.id,
            "booking created"
        );

        Ok(id)
    }
}
