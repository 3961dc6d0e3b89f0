// --- File: crates/salonify_common/src/routes.rs ---

// This file contains route definitions that are common across the application.
// Currently only the health check lives here.

use axum::{routing::get, Json, Router};
use serde_json::json;

/// Creates a router containing common routes that can be used across the application.
///
/// # Returns
/// A router configured with common routes.
pub fn routes() -> Router {
    Router::new().route(
        "/health",
        get(|| async { Json(json!({ "status": "ok" })) }),
    )
    // Add common routes here when needed
}
