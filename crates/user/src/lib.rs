pub mod password;

mod query;
pub(crate) mod repository;
mod root;

pub use query::*;
pub use root::*;
