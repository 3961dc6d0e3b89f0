// File: crates/salonify_plan/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::generator::{CreatePlanRequest, PlanErrorResponse, RescheduleRequest};
use crate::models::{
    GeneratedPlan, MembershipStatus, PlanAppointment, PlanDetail, PlanDraft, PlanStatus,
};

#[utoipa::path(
    post,
    path = "/plans/preview",
    request_body(content = CreatePlanRequest, example = json!({
        "client": { "id": "7b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d", "name": "Dana Keller" },
        "stylist_id": "stylist-17",
        "stylist_name": "Robin",
        "stylist_level_id": "senior",
        "details": {
            "svc-cut": { "first_date": "2025-06-02", "frequency_weeks": 4 },
            "svc-color": { "first_date": "2025-06-02", "frequency_weeks": 8 }
        }
    })),
    responses(
        (status = 200, description = "Generated draft, not persisted", body = PlanDraft),
        (status = 502, description = "Catalog unavailable", body = String)
    )
)]
fn doc_preview_plan_handler() {}

#[utoipa::path(
    post,
    path = "/plans",
    request_body = CreatePlanRequest,
    responses(
        (status = 200, description = "Persisted plan", body = GeneratedPlan),
        (status = 400, description = "Client id is missing or not a UUID", body = PlanErrorResponse),
        (status = 502, description = "Catalog or persistence failure; on a failed save the body carries the computed draft for /plans/save", body = PlanErrorResponse)
    )
)]
fn doc_create_plan_handler() {}

#[utoipa::path(
    post,
    path = "/plans/save",
    request_body = PlanDraft,
    responses(
        (status = 200, description = "Persisted plan", body = GeneratedPlan),
        (status = 400, description = "Client id is missing or not a UUID", body = String),
        (status = 502, description = "Persistence failure", body = String)
    )
)]
fn doc_save_plan_handler() {}

#[utoipa::path(
    get,
    path = "/plans/{plan_id}",
    params(("plan_id" = String, Path, description = "Plan id")),
    responses(
        (status = 200, description = "The plan", body = GeneratedPlan),
        (status = 404, description = "Plan not found", body = String)
    )
)]
fn doc_get_plan_handler() {}

#[utoipa::path(
    post,
    path = "/plans/{plan_id}/reschedule",
    params(("plan_id" = String, Path, description = "Plan id")),
    request_body(content = RescheduleRequest, example = json!({
        "recommended_date": "2025-06-02",
        "booked_date": "2025-06-05"
    })),
    responses(
        (status = 200, description = "Plan with shifted future appointments", body = GeneratedPlan),
        (status = 404, description = "Plan not found", body = String)
    )
)]
fn doc_reschedule_plan_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_preview_plan_handler,
        doc_create_plan_handler,
        doc_save_plan_handler,
        doc_get_plan_handler,
        doc_reschedule_plan_handler
    ),
    components(
        schemas(
            CreatePlanRequest,
            RescheduleRequest,
            PlanErrorResponse,
            PlanDraft,
            GeneratedPlan,
            PlanAppointment,
            PlanDetail,
            PlanStatus,
            MembershipStatus
        )
    ),
    tags(
        (name = "plans", description = "Roadmap plan generation API")
    ),
    servers(
        (url = "/api", description = "Plan API server")
    )
)]
pub struct PlanApiDoc;
