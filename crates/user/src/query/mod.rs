use std::ops::Deref;

use akkor_db::table::User;
use akkor_shared::user::{Actor, Role};
use sea_query::{Expr, ExprTrait, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

use crate::repository::{self, UserRow};

#[derive(Clone)]
pub struct Query(pub akkor_shared::State);

impl Deref for Query {
    type Target = akkor_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Public view of an account, never carries the password hash.
#[derive(Debug, Clone, FromRow)]
pub struct UserView {
    pub id: i64,
    pub email: String,
    pub pseudo: String,
    pub role: sqlx::types::Text<Role>,
    pub created_at: i64,
}

impl UserView {
    pub fn role(&self) -> Role {
        self.role.0
    }

    pub fn actor(&self) -> Actor {
        Actor::new(self.id, self.role.0)
    }

    pub fn joined_at(&self) -> String {
        akkor_shared::format_timestamp(self.created_at)
    }

    pub fn initial(&self) -> String {
        self.pseudo
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

impl From<UserRow> for UserView {
    fn from(value: UserRow) -> Self {
        Self {
            id: value.id,
            email: value.email,
            pseudo: value.pseudo,
            role: value.role,
            created_at: value.created_at,
        }
    }
}

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            User::Id,
            User::Email,
            User::Pseudo,
            User::Role,
            User::CreatedAt,
        ])
        .from(User::Table)
        .to_owned()
}

impl Query {
    pub fn new(state: akkor_shared::State) -> Self {
        Self(state)
    }

    pub async fn find(&self, id: i64) -> akkor_shared::Result<Option<UserView>> {
        let statement = select()
            .and_where(Expr::col(User::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, UserView, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    pub async fn find_by_email(&self, email: &str) -> akkor_shared::Result<Option<UserView>> {
        let statement = select()
            .and_where(Expr::col(User::Email).eq(email.trim().to_lowercase()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, UserView, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    /// The user directory, newest accounts first. Staff only.
    pub async fn list(&self, actor: &Actor) -> akkor_shared::Result<Vec<UserView>> {
        if !actor.role.can_list_users() {
            akkor_shared::forbidden!();
        }

        let mut statement = select();
        repository::order_by_recent(&mut statement);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, UserView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn show(&self, actor: &Actor, id: i64) -> akkor_shared::Result<UserView> {
        if !actor.can_view_user(id) {
            akkor_shared::forbidden!();
        }

        match self.find(id).await? {
            Some(user) => Ok(user),
            None => akkor_shared::not_found!("User {id}"),
        }
    }
}
