use std::{ops::Deref, str::FromStr};

use akkor_db::table::Hotel;
use akkor_shared::page::{Page, PageRequest};
use sea_query::{Cond, Expr, ExprTrait, Func, LikeExpr, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(Clone)]
pub struct Query(pub akkor_shared::State);

impl Deref for Query {
    type Target = akkor_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct HotelView {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub description: String,
    pub picture_list: sqlx::types::Json<Vec<String>>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl HotelView {
    pub fn pictures(&self) -> &[String] {
        &self.picture_list.0
    }

    pub fn cover(&self) -> Option<&str> {
        self.picture_list.0.first().map(String::as_str)
    }

    /// One picture URL per line, the way the edit form expects it.
    pub fn pictures_text(&self) -> String {
        self.picture_list.0.join("\n")
    }

    pub fn excerpt(&self) -> String {
        const MAX: usize = 140;

        if self.description.chars().count() <= MAX {
            return self.description.to_owned();
        }

        let cut = self.description.chars().take(MAX).collect::<String>();
        format!("{}…", cut.trim_end())
    }

    pub fn listed_at(&self) -> String {
        akkor_shared::format_timestamp(self.created_at)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct HotelOption {
    pub id: i64,
    pub name: String,
    pub location: String,
}

#[derive(EnumString, Display, VariantArray, AsRefStr, Default, Debug, Clone, Copy, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum SortBy {
    Name,
    Location,
    #[default]
    CreatedAt,
}

impl SortBy {
    /// Unknown or missing columns sort by creation date.
    pub fn parse(value: Option<&str>) -> Self {
        value
            .and_then(|v| SortBy::from_str(v.trim()).ok())
            .unwrap_or_default()
    }

    fn column(&self) -> Hotel {
        match self {
            SortBy::Name => Hotel::Name,
            SortBy::Location => Hotel::Location,
            SortBy::CreatedAt => Hotel::CreatedAt,
        }
    }
}

#[derive(EnumString, Display, AsRefStr, Default, Debug, Clone, Copy, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Only an explicit `asc` sorts ascending.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    fn order(&self) -> Order {
        match self {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct FilterQuery {
    pub search: Option<String>,
    pub sort: SortBy,
    pub order: SortOrder,
    pub page: PageRequest,
}

/// Escapes LIKE wildcards so user input only ever matches literally.
pub(crate) fn like_pattern(term: &str) -> LikeExpr {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            Hotel::Id,
            Hotel::Name,
            Hotel::Location,
            Hotel::Description,
            Hotel::PictureList,
            Hotel::CreatedAt,
            Hotel::UpdatedAt,
        ])
        .from(Hotel::Table)
        .to_owned()
}

impl Query {
    pub fn new(state: akkor_shared::State) -> Self {
        Self(state)
    }

    pub async fn find(&self, id: i64) -> akkor_shared::Result<Option<HotelView>> {
        let statement = select()
            .and_where(Expr::col(Hotel::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, HotelView, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    /// Every hotel, alphabetically, for the booking form.
    pub async fn all_by_name(&self) -> akkor_shared::Result<Vec<HotelOption>> {
        let statement = sea_query::Query::select()
            .columns([Hotel::Id, Hotel::Name, Hotel::Location])
            .from(Hotel::Table)
            .order_by(Hotel::Name, Order::Asc)
            .order_by(Hotel::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, HotelOption, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn filter(&self, input: FilterQuery) -> akkor_shared::Result<Page<HotelView>> {
        let mut cond = Cond::all();

        if let Some(search) = input.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let search = search.to_lowercase();
            cond = cond.add(
                Cond::any()
                    .add(Expr::col(Hotel::NameSearch).like(like_pattern(&search)))
                    .add(Expr::col(Hotel::LocationSearch).like(like_pattern(&search))),
            );
        }

        let count_statement = sea_query::Query::select()
            .expr(Func::count(Expr::col(Hotel::Id)))
            .from(Hotel::Table)
            .cond_where(cond.clone())
            .to_owned();

        let (sql, values) = count_statement.build_sqlx(SqliteQueryBuilder);
        let (total,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        let statement = select()
            .cond_where(cond)
            .order_by(input.sort.column(), input.order.order())
            .order_by(Hotel::Id, input.order.order())
            .limit(input.page.per_page)
            .offset(input.page.offset())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let hotels = sqlx::query_as_with::<_, HotelView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(Page::new(hotels, u64::try_from(total).unwrap_or_default(), input.page))
    }
}
