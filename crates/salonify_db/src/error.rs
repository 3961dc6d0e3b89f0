//! Error types for the database client

use salonify_common::SalonifyError;
use thiserror::Error;

/// Errors that can occur when working with the database client
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// Error with database transaction
    #[error("Database transaction error: {0}")]
    TransactionError(String),

    /// Error serializing or deserializing a stored row
    #[error("Database serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A plan's client id was missing or not a well-formed UUID
    #[error("Invalid client id: {0}")]
    InvalidClientId(String),

    /// The requested row does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Other errors
    #[error("Other database error: {0}")]
    Other(String),
}

impl From<DbError> for SalonifyError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::InvalidClientId(msg) => SalonifyError::InvalidClientId(msg),
            DbError::NotFound(msg) => SalonifyError::NotFoundError(msg),
            other => SalonifyError::DatabaseError(other.to_string()),
        }
    }
}
