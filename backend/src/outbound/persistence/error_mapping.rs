//! Diesel and pool error mapping shared by the repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{AdminRepositoryError, ReportingRepositoryError};

use super::pool::PoolError;

/// Coarse classification of a Diesel failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    UniqueViolation,
    Connection(String),
    Query(String),
}

pub(crate) fn classify_diesel_error(error: DieselError, operation: &str) -> DieselFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        other => debug!(error = %other, %operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DieselFailure::UniqueViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection(format!("{operation}: database connection closed"))
        }
        DieselError::NotFound => DieselFailure::Query(format!("{operation}: record not found")),
        DieselError::QueryBuilderError(_) => {
            DieselFailure::Query(format!("{operation}: invalid query"))
        }
        _ => DieselFailure::Query(format!("{operation}: database error")),
    }
}

pub(crate) fn admin_diesel_error(error: DieselError, operation: &str) -> AdminRepositoryError {
    match classify_diesel_error(error, operation) {
        DieselFailure::UniqueViolation => AdminRepositoryError::duplicate_email(),
        DieselFailure::Connection(message) => AdminRepositoryError::connection(message),
        DieselFailure::Query(message) => AdminRepositoryError::query(message),
    }
}

pub(crate) fn admin_pool_error(error: PoolError) -> AdminRepositoryError {
    AdminRepositoryError::connection(error.into_message())
}

pub(crate) fn reporting_diesel_error(
    error: DieselError,
    operation: &str,
) -> ReportingRepositoryError {
    match classify_diesel_error(error, operation) {
        DieselFailure::Connection(message) => ReportingRepositoryError::connection(message),
        // Reads never insert; a unique violation here means something else is wrong.
        DieselFailure::UniqueViolation => {
            ReportingRepositoryError::query(format!("{operation}: unexpected unique violation"))
        }
        DieselFailure::Query(message) => ReportingRepositoryError::query(message),
    }
}

pub(crate) fn reporting_pool_error(error: PoolError) -> ReportingRepositoryError {
    ReportingRepositoryError::connection(error.into_message())
}
