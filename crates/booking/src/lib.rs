mod command;
mod query;
mod stay;

pub use command::*;
pub use query::*;
pub use stay::*;
