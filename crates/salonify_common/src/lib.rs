

// --- File: crates/salonify_common/src/lib.rs ---

// Declare modules within this crate
pub mod models;    // Shared domain models (services, clients)
pub mod error;     // Error handling
pub mod http;      // HTTP utilities
pub mod services;  // Service abstractions
pub mod logging;   // Logging utilities
pub mod features;  // Feature flag handling
pub mod routes;    // Common route definitions

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    SalonifyError,
    HttpStatusCode,
    Context,
    config_error,
    validation_error,
    invalid_client_id,
    not_found,
    conflict,
    external_service_error,
    internal_error,
};

// Re-export HTTP utilities for easier access
pub use http::{
    IntoHttpResponse,
    handle_result,
    handle_json_result,
    map_error,
    map_json_error,
    client::{
        HTTP_CLIENT,
        create_client,
        get,
        post,
        put,
        delete,
        patch,
    },
};

// Re-export logging utilities for easier access
pub use logging::{
    init,
    init_with_level,
    log_error,
    log_result,
};

// Re-export feature flag handling utilities for easier access
pub use features::is_feature_enabled;

// Conditionally re-export feature-specific functions
#[cfg(feature = "catalog")]
pub use features::is_catalog_enabled;

#[cfg(feature = "plans")]
pub use features::is_plans_enabled;

// This crate provides common functionality that can be used across the application.
// It includes shared models, service abstractions, error handling, and HTTP utilities.
