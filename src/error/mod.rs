mod constants;
mod db;

pub use constants::*;
pub use db::*;

use sea_orm::DbErr;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Error {
    code: u16,
    message: &'static str,
    constraint: bool,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    const fn new(code: u16, message: &'static str, constraint: bool) -> Self {
        Self {
            code,
            message,
            constraint,
        }
    }

    #[inline]
    pub const fn code(&self) -> u16 {
        self.code
    }

    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// The database rejected the write. The surrounding transaction must be
    /// rolled back before it can be retried.
    #[inline]
    pub const fn is_constraint_violation(&self) -> bool {
        self.constraint
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<DbErr> for Error {
    #[inline]
    fn from(error: DbErr) -> Self {
        match error.constraint_violation() {
            Some(violation) if violation.kind == ViolationKind::NotNull => {
                tracing::debug!(?violation, "missing required column");
                constants::MISSING_FIELD
            }
            Some(violation) => {
                tracing::debug!(?violation, "constraint violation");
                constants::CONSTRAINT_VIOLATION
            }
            None => {
                tracing::error!("database error: {:?}", error);
                constants::DATABASE_ERROR
            }
        }
    }
}

macro_rules! const_error {
    ($name:ident, $code:literal, $msg:literal, constraint $(,)?) => {
        pub const $name: $crate::error::Error = $crate::error::Error::new($code, $msg, true);
    };
    ($name:ident, $code:literal, $msg:literal $(,)?) => {
        pub const $name: $crate::error::Error = $crate::error::Error::new($code, $msg, false);
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;
