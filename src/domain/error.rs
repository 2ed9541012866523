use sqlx::error::ErrorKind;
use thiserror::Error;

use super::department::DepartmentId;

/// Failures signalled by a department store.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("no department with identity {0}")]
    UnknownIdentity(DepartmentId),

    #[error("corrupt record: {0}")]
    Corrupt(String),

    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => PersistenceError::Constraint(db.message().to_string()),
                _ => PersistenceError::Database(db.message().to_string()),
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::WorkerCrashed | sqlx::Error::Io(_) => {
                PersistenceError::Unavailable(err.to_string())
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::ColumnNotFound(_) | sqlx::Error::Decode(_) => {
                PersistenceError::Corrupt(err.to_string())
            }
            _ => PersistenceError::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_are_unavailable() {
        let err: PersistenceError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, PersistenceError::Unavailable(_)));
        let err: PersistenceError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, PersistenceError::Unavailable(_)));
    }

    #[test]
    fn missing_column_is_corrupt() {
        let err: PersistenceError = sqlx::Error::ColumnNotFound("name".into()).into();
        assert!(matches!(err, PersistenceError::Corrupt(_)));
    }

    #[test]
    fn unknown_identity_names_the_id() {
        let err = PersistenceError::UnknownIdentity(DepartmentId(9));
        assert_eq!(err.to_string(), "no department with identity 9");
    }
}
