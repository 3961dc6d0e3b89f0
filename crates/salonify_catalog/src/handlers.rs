// --- File: crates/salonify_catalog/src/handlers.rs ---
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use salonify_common::models::Service;
use salonify_common::services::{BoxedError, CatalogProvider};
use salonify_config::AppConfig;
use std::sync::Arc;
use tracing::error;

// Define shared state needed by catalog handlers
#[derive(Clone)]
pub struct CatalogState {
    pub config: Arc<AppConfig>,
    pub provider: Arc<dyn CatalogProvider<Error = BoxedError>>,
}

/// Handler returning the full service catalog as currently synced from the POS.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/catalog/services",
    responses(
        (status = 200, description = "The service catalog", body = [Service]),
        (status = 502, description = "POS catalog unavailable")
    ),
    tag = "Catalog"
))]
pub async fn list_services_handler(
    State(state): State<Arc<CatalogState>>,
) -> Result<Json<Vec<Service>>, (StatusCode, String)> {
    match state.provider.list_services().await {
        Ok(services) => Ok(Json(services)),
        Err(e) => {
            error!("Failed to fetch service catalog: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                "Failed to fetch service catalog".to_string(),
            ))
        }
    }
}

/// Handler returning a single catalog service by id.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/catalog/services/{service_id}",
    params(("service_id" = String, Path, description = "Catalog service id")),
    responses(
        (status = 200, description = "The service", body = Service),
        (status = 404, description = "No such service"),
        (status = 502, description = "POS catalog unavailable")
    ),
    tag = "Catalog"
))]
pub async fn get_service_handler(
    State(state): State<Arc<CatalogState>>,
    Path(service_id): Path<String>,
) -> Result<Json<Service>, (StatusCode, String)> {
    match state.provider.get_service(&service_id).await {
        Ok(Some(service)) => Ok(Json(service)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            format!("Service not found: {}", service_id),
        )),
        Err(e) => {
            error!("Failed to fetch service {}: {}", service_id, e);
            Err((
                StatusCode::BAD_GATEWAY,
                "Failed to fetch service catalog".to_string(),
            ))
        }
    }
}
