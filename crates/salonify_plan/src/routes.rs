// --- File: crates/salonify_plan/src/routes.rs ---

use crate::handlers::{
    create_plan_handler, get_plan_handler, list_plans_handler, preview_plan_handler,
    reschedule_plan_handler, save_plan_handler, PlanState,
};
use crate::repository::PlanRepository;
use axum::{
    routing::{get, post},
    Router,
};
use salonify_common::services::{BoxedError, CatalogProvider};
use salonify_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the roadmap plan feature.
///
/// The repository and catalog collaborators are injected by the backend so
/// tests can substitute mocks.
pub fn routes(
    config: Arc<AppConfig>,
    repository: Arc<dyn PlanRepository>,
    catalog: Arc<dyn CatalogProvider<Error = BoxedError>>,
) -> Router {
    let plan_state = Arc::new(PlanState {
        config,
        repository,
        catalog,
    });

    Router::new()
        .route("/plans", post(create_plan_handler).get(list_plans_handler))
        .route("/plans/preview", post(preview_plan_handler))
        .route("/plans/save", post(save_plan_handler))
        .route("/plans/{plan_id}", get(get_plan_handler))
        .route("/plans/{plan_id}/reschedule", post(reschedule_plan_handler))
        .with_state(plan_state)
}
