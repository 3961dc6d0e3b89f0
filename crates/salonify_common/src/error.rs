// --- File: crates/salonify_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Salonify errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each crate can extend this by implementing From<SpecificError> for SalonifyError.
#[derive(Error, Debug)]
pub enum SalonifyError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A plan referenced a client whose identifier is missing or not a UUID.
    /// Saves must be aborted before any write is attempted.
    #[error("Invalid client identifier: {0}")]
    InvalidClientId(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., resource already exists)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to a timeout
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Error that doesn't fit into any other category
    #[error("Other error: {0}")]
    OtherError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for SalonifyError {
    fn status_code(&self) -> u16 {
        match self {
            SalonifyError::HttpError(_) => 500,
            SalonifyError::ParseError(_) => 400,
            SalonifyError::ConfigError(_) => 500,
            SalonifyError::ValidationError(_) => 400,
            SalonifyError::InvalidClientId(_) => 400,
            SalonifyError::DatabaseError(_) => 500,
            SalonifyError::ExternalServiceError { .. } => 502,
            SalonifyError::ConflictError(_) => 409,
            SalonifyError::NotFoundError(_) => 404,
            SalonifyError::TimeoutError(_) => 504,
            SalonifyError::InternalError(_) => 500,
            SalonifyError::OtherError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
///
/// This trait can be implemented by error types to provide a consistent way
/// to add context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, SalonifyError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, SalonifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, SalonifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| SalonifyError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, SalonifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| SalonifyError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for SalonifyError {
    fn from(err: reqwest::Error) -> Self {
        SalonifyError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for SalonifyError {
    fn from(err: serde_json::Error) -> Self {
        SalonifyError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for SalonifyError {
    fn from(err: std::io::Error) -> Self {
        SalonifyError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> SalonifyError {
    SalonifyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> SalonifyError {
    SalonifyError::ValidationError(message.to_string())
}

pub fn invalid_client_id<T: fmt::Display>(message: T) -> SalonifyError {
    SalonifyError::InvalidClientId(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> SalonifyError {
    SalonifyError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> SalonifyError {
    SalonifyError::ConflictError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> SalonifyError {
    SalonifyError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> SalonifyError {
    SalonifyError::InternalError(message.to_string())
}
