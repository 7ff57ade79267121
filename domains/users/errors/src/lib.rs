use common_errors::AppError;
use sql_connection::{PgError, PoolError as DbPoolError};
use thiserror::Error;

/// Everything that can go wrong between the handler and the store.
///
/// The variants exist for the log pipeline only: on the HTTP surface they
/// all collapse to the same empty 404 (see the `AppError` conversion).
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {email}")]
    NotFound { email: String },
    #[error("Database error: {0}")]
    Database(#[from] PgError),
    #[error("Database pool error: {0}")]
    DatabasePool(#[from] DbPoolError),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        // A missing row and a dead connection look identical to clients;
        // only the logged details tell them apart.
        let details = match &err {
            UserError::NotFound { email } => {
                format!("no user with email '{email}'")
            }
            UserError::Database(db_err) => {
                format!("database error: {db_err}")
            }
            UserError::DatabasePool(pool_err) => {
                format!("database connection error: {pool_err}")
            }
            UserError::InternalError(msg) => {
                format!("internal error: {msg}")
            }
        };

        AppError::not_found_with_details(
            "USER_NOT_FOUND",
            "User not found",
            &details,
        )
    }
}
