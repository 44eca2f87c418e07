pub mod booking;
mod command;
mod date;
pub mod page;
pub mod user;

pub use command::*;
pub use date::*;

#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}
