#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    User(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("forbidden")]
    Forbidden,

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

impl Error {
    /// Errors caused by the submitted input, as opposed to a missing or
    /// forbidden resource or a server failure.
    pub fn is_input(&self) -> bool {
        matches!(self, Error::Validate(_) | Error::User(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::Unknown(anyhow::anyhow!("{value}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<time::error::ComponentRange> for Error {
    fn from(value: time::error::ComponentRange) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! user {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::User(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::User(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::NotFound(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::NotFound(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! forbidden {
    () => {
        return Err($crate::Error::Forbidden)
    };
}
