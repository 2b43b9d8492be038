use sea_orm::{DbErr, RuntimeErr};
use sqlx::{postgres::PgDatabaseError, Error as SqlxError};

const NOT_NULL_VIOLATION: &str = "23502";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";
const CHECK_VIOLATION: &str = "23514";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    NotNull,
    ForeignKey,
    Unique,
    Check,
}

/// An integrity constraint rejected by Postgres.
///
/// `constraint` is set for unique, foreign key and check violations, `column`
/// for not-null violations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstraintViolation<'a> {
    pub kind: ViolationKind,
    pub constraint: Option<&'a str>,
    pub column: Option<&'a str>,
}

pub trait DatabaseError {
    fn unique_violation(&self, constraint: &str) -> bool;
    fn foreign_key_violation(&self, constraint: &str) -> bool;
    fn not_null_violation(&self, column: &str) -> bool;
    fn check_violation(&self, constraint: &str) -> bool;
    fn constraint_violation(&self) -> Option<ConstraintViolation<'_>>;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self, constraint: &str) -> bool {
        is_kind_and_constraint(self, ViolationKind::Unique, constraint)
    }

    fn foreign_key_violation(&self, constraint: &str) -> bool {
        is_kind_and_constraint(self, ViolationKind::ForeignKey, constraint)
    }

    fn not_null_violation(&self, column: &str) -> bool {
        matches!(
            self.constraint_violation(),
            Some(violation) if violation.kind == ViolationKind::NotNull
                && violation.column == Some(column)
        )
    }

    fn check_violation(&self, constraint: &str) -> bool {
        is_kind_and_constraint(self, ViolationKind::Check, constraint)
    }

    fn constraint_violation(&self) -> Option<ConstraintViolation<'_>> {
        let pg_err = get_database_error(self)?.try_downcast_ref::<PgDatabaseError>()?;

        let kind = match pg_err.code() {
            NOT_NULL_VIOLATION => ViolationKind::NotNull,
            FOREIGN_KEY_VIOLATION => ViolationKind::ForeignKey,
            UNIQUE_VIOLATION => ViolationKind::Unique,
            CHECK_VIOLATION => ViolationKind::Check,
            _ => return None,
        };

        Some(ConstraintViolation {
            kind,
            constraint: pg_err.constraint(),
            column: pg_err.column(),
        })
    }
}

#[allow(clippy::borrowed_box)]
fn get_database_error(err: &DbErr) -> Option<&Box<dyn sqlx::error::DatabaseError + 'static>> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        _ => None,
    }
}

fn is_kind_and_constraint(err: &DbErr, kind: ViolationKind, constraint: &str) -> bool {
    let Some(violation) = err.constraint_violation() else {
        return false;
    };

    violation.kind == kind && violation.constraint == Some(constraint)
}
