//! Error kinds at the store-interface boundary.
//!
//! Store implementations translate their backend failures into these kinds;
//! everything above the store layer works in terms of `StoreError` and never
//! sees a raw driver error.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store failure: {0}")]
    Unknown(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(e.to_string())
            }
            sqlx::Error::Database(db_err) => {
                // Unique (23505) and foreign key (23503) violations surface as conflicts
                match db_err.code().as_deref() {
                    Some("23505") | Some("23503") => {
                        StoreError::Conflict(db_err.message().to_string())
                    }
                    _ => StoreError::Unknown(db_err.to_string()),
                }
            }
            other => StoreError::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_translates_to_not_found() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test]
    fn pool_timeout_translates_to_unavailable() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn protocol_errors_translate_to_unknown() {
        let err = StoreError::from(sqlx::Error::Protocol("bad frame".into()));
        assert!(matches!(err, StoreError::Unknown(_)));
    }
}
