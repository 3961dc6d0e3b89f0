// File: crates/salonify_plan/src/handlers.rs
use crate::generator::{
    generate_plan, shift_future_appointments, validate_client_id, CreatePlanRequest, PlanError,
    PlanErrorResponse, RescheduleRequest,
};
use crate::models::{GeneratedPlan, PlanDraft};
use crate::repository::PlanRepository;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use salonify_common::services::{BoxedError, CatalogProvider};
use salonify_config::AppConfig;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

// Define shared state needed by plan handlers
#[derive(Clone)]
pub struct PlanState {
    pub config: Arc<AppConfig>,
    pub repository: Arc<dyn PlanRepository>,
    pub catalog: Arc<dyn CatalogProvider<Error = BoxedError>>,
}

impl PlanState {
    fn horizon_days(&self) -> i64 {
        self.config
            .plan
            .as_ref()
            .map(|p| p.horizon_days())
            .unwrap_or(crate::generator::DEFAULT_HORIZON_DAYS)
    }
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct PlanListQuery {
    /// Client UUID to list plans for.
    pub client_id: String,
}

fn map_plan_error(err: PlanError) -> (StatusCode, String) {
    match err {
        PlanError::InvalidClientId(msg) => (StatusCode::BAD_REQUEST, msg),
        PlanError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        PlanError::CatalogError(msg) => (StatusCode::BAD_GATEWAY, msg),
        PlanError::PersistenceError(msg) => (StatusCode::BAD_GATEWAY, msg),
    }
}

/// Runs the generator against the current catalog without persisting anything.
async fn build_draft(
    state: &PlanState,
    payload: &CreatePlanRequest,
) -> Result<PlanDraft, (StatusCode, String)> {
    let services = state.catalog.list_services().await.map_err(|e| {
        error!("Failed to fetch service catalog: {}", e);
        (
            StatusCode::BAD_GATEWAY,
            "Failed to fetch service catalog".to_string(),
        )
    })?;

    Ok(generate_plan(
        &services,
        &payload.details,
        &payload.client,
        &payload.stylist_id,
        &payload.stylist_name,
        payload.stylist_level_id.as_deref(),
        Utc::now().date_naive(),
        state.horizon_days(),
    ))
}

/// Handler to preview a roadmap without saving it (wizard support).
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/plans/preview",
    request_body = CreatePlanRequest,
    responses(
        (status = 200, description = "Generated draft, not persisted", body = PlanDraft),
        (status = 502, description = "Catalog unavailable")
    ),
    tag = "Plans"
))]
pub async fn preview_plan_handler(
    State(state): State<Arc<PlanState>>,
    Json(payload): Json<CreatePlanRequest>,
) -> Result<Json<PlanDraft>, (StatusCode, String)> {
    let draft = build_draft(&state, &payload).await?;
    Ok(Json(draft))
}

/// Handler to generate a roadmap and persist it.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/plans",
    request_body = CreatePlanRequest,
    responses(
        (status = 200, description = "Persisted plan", body = GeneratedPlan),
        (status = 400, description = "Client id is missing or not a UUID", body = PlanErrorResponse),
        (status = 502, description = "Catalog or persistence failure; on a failed save the body carries the computed draft", body = PlanErrorResponse)
    ),
    tag = "Plans"
))]
pub async fn create_plan_handler(
    State(state): State<Arc<PlanState>>,
    Json(payload): Json<CreatePlanRequest>,
) -> Result<Json<GeneratedPlan>, (StatusCode, Json<PlanErrorResponse>)> {
    // The client id must be a UUID before any write is attempted.
    validate_client_id(&payload.client).map_err(|e| {
        error!("CRITICAL INVARIANT VIOLATION: {}", e);
        let (status, message) = map_plan_error(e);
        (status, Json(PlanErrorResponse::failure(message)))
    })?;

    let draft = build_draft(&state, &payload)
        .await
        .map_err(|(status, message)| (status, Json(PlanErrorResponse::failure(message))))?;

    match state.repository.save_plan(draft.clone()).await {
        Ok(plan) => {
            info!("Saved plan {} for client {}", plan.id, plan.client.id);
            Ok(Json(plan))
        }
        Err(e) => {
            error!("Failed to save plan: {}", e);
            // Hand the draft back so the save can be retried via /plans/save
            // without running generation again.
            Err((
                StatusCode::BAD_GATEWAY,
                Json(PlanErrorResponse::failed_save(
                    draft,
                    "Failed to save plan; resubmit the returned draft to /plans/save".to_string(),
                )),
            ))
        }
    }
}

/// Handler to persist an already-computed draft.
///
/// Lets the operator retry a failed save without regenerating the plan.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/plans/save",
    request_body = PlanDraft,
    responses(
        (status = 200, description = "Persisted plan", body = GeneratedPlan),
        (status = 400, description = "Client id is missing or not a UUID"),
        (status = 502, description = "Persistence failure")
    ),
    tag = "Plans"
))]
pub async fn save_plan_handler(
    State(state): State<Arc<PlanState>>,
    Json(draft): Json<PlanDraft>,
) -> Result<Json<GeneratedPlan>, (StatusCode, String)> {
    validate_client_id(&draft.client).map_err(|e| {
        error!("CRITICAL INVARIANT VIOLATION: {}", e);
        map_plan_error(e)
    })?;

    match state.repository.save_plan(draft).await {
        Ok(plan) => Ok(Json(plan)),
        Err(e) => {
            error!("Failed to save plan: {}", e);
            Err((StatusCode::BAD_GATEWAY, "Failed to save plan".to_string()))
        }
    }
}

/// Handler to fetch a single plan by id.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/plans/{plan_id}",
    params(("plan_id" = String, Path, description = "Plan id")),
    responses(
        (status = 200, description = "The plan", body = GeneratedPlan),
        (status = 404, description = "Plan not found")
    ),
    tag = "Plans"
))]
pub async fn get_plan_handler(
    State(state): State<Arc<PlanState>>,
    Path(plan_id): Path<String>,
) -> Result<Json<GeneratedPlan>, (StatusCode, String)> {
    match state.repository.find_by_id(&plan_id).await {
        Ok(Some(plan)) => Ok(Json(plan)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            format!("Plan not found: {}", plan_id),
        )),
        Err(e) => {
            error!("Failed to load plan {}: {}", plan_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load plan".to_string(),
            ))
        }
    }
}

/// Handler to list all plans for a client.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/plans",
    params(PlanListQuery),
    responses(
        (status = 200, description = "Plans for the client, newest first", body = [GeneratedPlan])
    ),
    tag = "Plans"
))]
pub async fn list_plans_handler(
    State(state): State<Arc<PlanState>>,
    Query(query): Query<PlanListQuery>,
) -> Result<Json<Vec<GeneratedPlan>>, (StatusCode, String)> {
    match state.repository.find_by_client(&query.client_id).await {
        Ok(plans) => Ok(Json(plans)),
        Err(e) => {
            error!("Failed to list plans for {}: {}", query.client_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to list plans".to_string(),
            ))
        }
    }
}

/// Handler applying booking-offset propagation to an existing plan.
///
/// When a booked visit diverges from the plan's recommended date, the whole
/// forward schedule shifts in lockstep; past appointments stay put.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/plans/{plan_id}/reschedule",
    params(("plan_id" = String, Path, description = "Plan id")),
    request_body = RescheduleRequest,
    responses(
        (status = 200, description = "Plan with shifted future appointments", body = GeneratedPlan),
        (status = 404, description = "Plan not found"),
        (status = 502, description = "Persistence failure")
    ),
    tag = "Plans"
))]
pub async fn reschedule_plan_handler(
    State(state): State<Arc<PlanState>>,
    Path(plan_id): Path<String>,
    Json(payload): Json<RescheduleRequest>,
) -> Result<Json<GeneratedPlan>, (StatusCode, String)> {
    let plan = match state.repository.find_by_id(&plan_id).await {
        Ok(Some(plan)) => plan,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                format!("Plan not found: {}", plan_id),
            ))
        }
        Err(e) => {
            error!("Failed to load plan {}: {}", plan_id, e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load plan".to_string(),
            ));
        }
    };

    let shifted = shift_future_appointments(
        &plan.appointments,
        payload.recommended_date,
        payload.booked_date,
    );

    match state.repository.update_appointments(&plan_id, shifted).await {
        Ok(updated) => {
            info!(
                "Rescheduled plan {}: offset {} day(s) from {}",
                plan_id,
                (payload.booked_date - payload.recommended_date).num_days(),
                payload.recommended_date
            );
            Ok(Json(updated))
        }
        Err(e) => {
            error!("Failed to update plan {}: {}", plan_id, e);
            Err((
                StatusCode::BAD_GATEWAY,
                "Failed to update plan".to_string(),
            ))
        }
    }
}
