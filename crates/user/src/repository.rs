use akkor_db::table::User;
use akkor_shared::user::Role;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(FromRow)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub pseudo: String,
    pub password: String,
    pub role: sqlx::types::Text<Role>,
    pub created_at: i64,
}

pub enum FindType {
    Id(i64),
    Email(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> akkor_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns([
            User::Id,
            User::Email,
            User::Pseudo,
            User::Password,
            User::Role,
            User::CreatedAt,
        ])
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Email(email) => statement.and_where(Expr::col(User::Email).eq(email)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// True when another account already uses this email.
pub(crate) async fn email_taken(
    pool: &SqlitePool,
    email: &str,
    except: Option<i64>,
) -> akkor_shared::Result<bool> {
    let mut statement = Query::select()
        .column(User::Id)
        .from(User::Table)
        .and_where(Expr::col(User::Email).eq(email))
        .limit(1)
        .to_owned();

    if let Some(id) = except {
        statement.and_where(Expr::col(User::Id).ne(id));
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_optional(pool)
        .await?
        .is_some())
}

/// The unique email index is the last line of defense when two requests
/// race past `email_taken`.
fn email_conflict(err: sqlx::Error) -> akkor_shared::Error {
    if err
        .as_database_error()
        .is_some_and(|e| e.is_unique_violation())
    {
        return akkor_shared::Error::User("Email already taken".to_owned());
    }

    err.into()
}

pub struct CreateInput {
    pub email: String,
    pub pseudo: String,
    pub password: String,
    pub role: Role,
}

pub(crate) async fn create(pool: &SqlitePool, input: CreateInput) -> akkor_shared::Result<i64> {
    let now = akkor_shared::now();
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([
            User::Email,
            User::Pseudo,
            User::Password,
            User::Role,
            User::PseudoSearch,
            User::CreatedAt,
            User::UpdatedAt,
        ])
        .values_panic([
            input.email.into(),
            input.pseudo.to_owned().into(),
            input.password.into(),
            input.role.to_string().into(),
            input.pseudo.to_lowercase().into(),
            now.into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values)
        .execute(pool)
        .await
        .map_err(email_conflict)?;

    Ok(result.last_insert_rowid())
}

#[derive(Default)]
pub struct UpdateInput {
    pub id: i64,
    pub email: Option<String>,
    pub pseudo: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

pub(crate) async fn update(pool: &SqlitePool, input: UpdateInput) -> akkor_shared::Result<()> {
    let mut statement = Query::update()
        .table(User::Table)
        .value(User::UpdatedAt, akkor_shared::now())
        .and_where(Expr::col(User::Id).eq(input.id))
        .to_owned();

    if let Some(email) = input.email {
        statement.value(User::Email, email);
    }

    if let Some(pseudo) = input.pseudo {
        statement.value(User::PseudoSearch, pseudo.to_lowercase());
        statement.value(User::Pseudo, pseudo);
    }

    if let Some(password) = input.password {
        statement.value(User::Password, password);
    }

    if let Some(role) = input.role {
        statement.value(User::Role, role.to_string());
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values)
        .execute(pool)
        .await
        .map_err(email_conflict)?;

    Ok(())
}

pub(crate) async fn delete(pool: &SqlitePool, id: i64) -> akkor_shared::Result<()> {
    let statement = Query::delete()
        .from_table(User::Table)
        .and_where(Expr::col(User::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) fn order_by_recent(statement: &mut sea_query::SelectStatement) {
    statement
        .order_by(User::CreatedAt, Order::Desc)
        .order_by(User::Id, Order::Desc);
}
