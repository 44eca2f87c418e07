use std::ops::Deref;

use akkor_db::table::{Booking, Hotel, User};
use akkor_shared::{
    booking::BookingStatus,
    page::{Page, PageRequest},
    user::Actor,
};
use sea_query::{
    Alias, Cond, Expr, ExprTrait, Func, LikeExpr, Order, SelectStatement, SqliteQueryBuilder,
};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use time::Date;

#[derive(Clone)]
pub struct Query(pub akkor_shared::State);

impl Deref for Query {
    type Target = akkor_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A booking row joined with the names needed to display it.
#[derive(Debug, Clone, FromRow)]
pub struct BookingView {
    pub id: i64,
    pub user_id: i64,
    pub hotel_id: i64,
    pub check_in: String,
    pub check_out: String,
    pub status: sqlx::types::Text<BookingStatus>,
    pub created_at: i64,
    pub hotel_name: String,
    pub hotel_location: String,
    pub user_pseudo: String,
    pub user_email: String,
}

impl BookingView {
    pub fn status(&self) -> BookingStatus {
        self.status.0
    }

    pub fn check_in_date(&self) -> akkor_shared::Result<Date> {
        akkor_shared::parse_date(&self.check_in)
    }

    pub fn check_out_date(&self) -> akkor_shared::Result<Date> {
        akkor_shared::parse_date(&self.check_out)
    }

    pub fn nights(&self) -> i64 {
        match (self.check_in_date(), self.check_out_date()) {
            (Ok(check_in), Ok(check_out)) => (check_out - check_in).whole_days(),
            _ => 0,
        }
    }

    pub fn booked_at(&self) -> String {
        akkor_shared::format_timestamp(self.created_at)
    }
}

#[derive(Debug, Default, Clone)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: PageRequest,
}

fn select() -> SelectStatement {
    let mut statement = sea_query::Query::select()
        .columns([
            (Booking::Table, Booking::Id),
            (Booking::Table, Booking::UserId),
            (Booking::Table, Booking::HotelId),
            (Booking::Table, Booking::CheckIn),
            (Booking::Table, Booking::CheckOut),
            (Booking::Table, Booking::Status),
            (Booking::Table, Booking::CreatedAt),
        ])
        .expr_as(
            Expr::col((Hotel::Table, Hotel::Name)),
            Alias::new("hotel_name"),
        )
        .expr_as(
            Expr::col((Hotel::Table, Hotel::Location)),
            Alias::new("hotel_location"),
        )
        .expr_as(
            Expr::col((User::Table, User::Pseudo)),
            Alias::new("user_pseudo"),
        )
        .expr_as(
            Expr::col((User::Table, User::Email)),
            Alias::new("user_email"),
        )
        .from(Booking::Table)
        .to_owned();

    join(&mut statement);

    statement
}

fn join(statement: &mut SelectStatement) {
    statement
        .inner_join(
            Hotel::Table,
            Expr::col((Booking::Table, Booking::HotelId)).equals((Hotel::Table, Hotel::Id)),
        )
        .inner_join(
            User::Table,
            Expr::col((Booking::Table, Booking::UserId)).equals((User::Table, User::Id)),
        );
}

fn order_by_recent(statement: &mut SelectStatement) {
    statement
        .order_by((Booking::Table, Booking::CreatedAt), Order::Desc)
        .order_by((Booking::Table, Booking::Id), Order::Desc);
}

fn like_pattern(term: &str) -> LikeExpr {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}

/// Row visibility for a listing. Admins see every row and may search by
/// booking id (a positive integer) or by guest pseudo or email. Everyone
/// else, employees included, is restricted to their own rows and the
/// search term is ignored.
pub fn list_condition(actor: &Actor, search: Option<&str>) -> Cond {
    if !actor.role.sees_all_bookings() {
        return Cond::all().add(Expr::col((Booking::Table, Booking::UserId)).eq(actor.id));
    }

    let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) else {
        return Cond::all();
    };

    if let Some(id) = search.parse::<i64>().ok().filter(|id| *id > 0) {
        return Cond::all().add(Expr::col((Booking::Table, Booking::Id)).eq(id));
    }

    let search = search.to_lowercase();

    Cond::any()
        .add(Expr::col((User::Table, User::PseudoSearch)).like(like_pattern(&search)))
        .add(Expr::col((User::Table, User::Email)).like(like_pattern(&search)))
}

impl Query {
    pub fn new(state: akkor_shared::State) -> Self {
        Self(state)
    }

    pub async fn find(&self, id: i64) -> akkor_shared::Result<Option<BookingView>> {
        let statement = select()
            .and_where(Expr::col((Booking::Table, Booking::Id)).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, BookingView, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    pub async fn list(
        &self,
        actor: &Actor,
        input: ListQuery,
    ) -> akkor_shared::Result<Page<BookingView>> {
        let cond = list_condition(actor, input.search.as_deref());

        let mut count_statement = sea_query::Query::select()
            .expr(Func::count(Expr::col((Booking::Table, Booking::Id))))
            .from(Booking::Table)
            .to_owned();
        join(&mut count_statement);
        count_statement.cond_where(cond.clone());

        let (sql, values) = count_statement.build_sqlx(SqliteQueryBuilder);
        let (total,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        let mut statement = select()
            .cond_where(cond)
            .limit(input.page.per_page)
            .offset(input.page.offset())
            .to_owned();
        order_by_recent(&mut statement);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let bookings = sqlx::query_as_with::<_, BookingView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(Page::new(bookings, u64::try_from(total).unwrap_or_default(), input.page))
    }

    /// Latest bookings of a user for the profile page.
    pub async fn recent_for_user(
        &self,
        user_id: i64,
        limit: u64,
    ) -> akkor_shared::Result<Vec<BookingView>> {
        let mut statement = select()
            .and_where(Expr::col((Booking::Table, Booking::UserId)).eq(user_id))
            .limit(limit)
            .to_owned();
        order_by_recent(&mut statement);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, BookingView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn count_for_user(&self, user_id: i64) -> akkor_shared::Result<u64> {
        let statement = sea_query::Query::select()
            .expr(Func::count(Expr::col(Booking::Id)))
            .from(Booking::Table)
            .and_where(Expr::col(Booking::UserId).eq(user_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (total,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use akkor_shared::user::Role;

    fn where_sql(actor: &Actor, search: Option<&str>) -> String {
        sea_query::Query::select()
            .column(Booking::Id)
            .from(Booking::Table)
            .cond_where(list_condition(actor, search))
            .to_string(SqliteQueryBuilder)
    }

    #[test]
    fn non_admins_only_see_their_rows() {
        let employee = Actor::new(7, Role::Employee);
        let sql = where_sql(&employee, Some("42"));

        assert!(sql.contains(r#""booking"."user_id" = 7"#), "{sql}");
        assert!(!sql.contains(r#""booking"."id" = 42"#), "{sql}");
    }

    #[test]
    fn admin_search_by_id_or_guest() {
        let admin = Actor::new(1, Role::Admin);

        let by_id = where_sql(&admin, Some(" 42 "));
        assert!(by_id.contains(r#""booking"."id" = 42"#), "{by_id}");

        let by_guest = where_sql(&admin, Some("john"));
        assert!(by_guest.contains(r#""user"."pseudo_search" LIKE"#), "{by_guest}");
        assert!(by_guest.contains(r#""user"."email" LIKE"#), "{by_guest}");

        let negative = where_sql(&admin, Some("-3"));
        assert!(negative.contains("LIKE"), "{negative}");

        let everything = where_sql(&admin, Some("   "));
        assert!(!everything.contains("user_id"), "{everything}");
        assert!(!everything.contains("LIKE"), "{everything}");
        assert!(!everything.contains(r#""booking"."id" ="#), "{everything}");
    }
}
