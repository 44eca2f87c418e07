use sqlx_migrator::{Info, Migrator};

mod m0_1;
mod m0_2;
pub mod table;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::<sqlx::Sqlite>::default();
    migrator.add_migrations(vec![Box::new(m0_1::M0_1), Box::new(m0_2::M0_2)])?;

    Ok(migrator)
}
