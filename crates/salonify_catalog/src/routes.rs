// --- File: crates/salonify_catalog/src/routes.rs ---

use crate::handlers::{get_service_handler, list_services_handler, CatalogState};
use axum::{routing::get, Router};
use salonify_common::services::{BoxedError, CatalogProvider};
use salonify_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the catalog feature.
///
/// The provider is injected so the backend can share one catalog instance
/// between these routes and the plan generator.
pub fn routes(
    config: Arc<AppConfig>,
    provider: Arc<dyn CatalogProvider<Error = BoxedError>>,
) -> Router {
    let catalog_state = Arc::new(CatalogState { config, provider });

    Router::new()
        .route("/catalog/services", get(list_services_handler))
        .route("/catalog/services/{service_id}", get(get_service_handler))
        .with_state(catalog_state)
}
