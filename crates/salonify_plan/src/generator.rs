// --- File: crates/salonify_plan/src/generator.rs ---
use crate::models::{PlanAppointment, PlanDetail, PlanDraft};
use chrono::{Duration, NaiveDate};
use salonify_common::models::{Client, Service};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid client identifier: {0}")]
    InvalidClientId(String),
    #[error("Plan not found: {0}")]
    NotFound(String),
    #[error("Catalog error: {0}")]
    CatalogError(String),
    #[error("Persistence error: {0}")]
    PersistenceError(String),
}

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreatePlanRequest {
    /// The client the roadmap is generated for; `client.id` must be a UUID.
    pub client: Client,
    pub stylist_id: String,
    pub stylist_name: String,
    /// Selects tier-priced costs where a service defines them.
    pub stylist_level_id: Option<String>,
    /// Per-service recurrence configuration, keyed by service id.
    pub details: HashMap<String, PlanDetail>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RescheduleRequest {
    /// The plan's originally recommended date for the booked visit.
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-06-02"))]
    pub recommended_date: NaiveDate,
    /// The date the visit was actually booked for.
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-06-05"))]
    pub booked_date: NaiveDate,
}

/// Error body for `POST /plans`. When generation succeeded but persistence
/// did not, `draft` carries the computed plan so the caller can resubmit it
/// to `/plans/save` without regenerating.
#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PlanErrorResponse {
    pub success: bool,
    pub draft: Option<PlanDraft>,
    pub message: String,
}

impl PlanErrorResponse {
    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            draft: None,
            message,
        }
    }

    pub fn failed_save(draft: PlanDraft, message: String) -> Self {
        Self {
            success: false,
            draft: Some(draft),
            message,
        }
    }
}

/// Forward horizon of a generated roadmap, in days.
pub const DEFAULT_HORIZON_DAYS: i64 = 365;

// --- Generation Logic ---

/// Expands a sparse per-service recurrence specification into a concrete,
/// day-merged appointment calendar and computes summary financial statistics.
///
/// Pure computation: inputs are never mutated, and calling twice with the same
/// arguments yields identical drafts. Identity and lifecycle fields are left
/// to the caller.
///
/// Rules:
/// - A service contributes only if its detail has both `first_date` and
///   `frequency_weeks`; incomplete details are silently excluded.
/// - Frequencies below 1 week are clamped to 1.
/// - The iteration window ends at `today + horizon_days` for every service,
///   regardless of its own start date; services starting late get a shorter
///   effective window. A `first_date` in the past is iterated as chosen, with
///   no clamping to today.
/// - Occurrences landing on the same calendar day are merged into a single
///   appointment with concatenated service lists.
/// - Costs resolve through `tier_prices` for the given stylist level, falling
///   back to the base cost when no entry exists.
#[allow(clippy::too_many_arguments)]
pub fn generate_plan(
    services: &[Service],
    details: &HashMap<String, PlanDetail>,
    client: &Client,
    stylist_id: &str,
    stylist_name: &str,
    stylist_level_id: Option<&str>,
    today: NaiveDate,
    horizon_days: i64,
) -> PlanDraft {
    let plan_end = today + Duration::days(horizon_days);

    // Detail keys that match no catalog service are ignored, but flag them:
    // the wizard should only ever submit known ids.
    for service_id in details.keys() {
        if !services.iter().any(|s| &s.id == service_id) {
            warn!("Ignoring plan detail for unknown service id: {}", service_id);
        }
    }

    // BTreeMap keeps the merged appointments sorted ascending by date.
    let mut occurrences_by_day: BTreeMap<NaiveDate, Vec<Service>> = BTreeMap::new();
    let mut total_cost: i64 = 0;

    for service in services {
        let Some(detail) = details.get(&service.id) else {
            continue;
        };
        let (Some(first_date), Some(frequency_weeks)) = (detail.first_date, detail.frequency_weeks)
        else {
            // Incomplete wizard input is not an error; the service is skipped.
            continue;
        };

        let step = Duration::weeks(i64::from(frequency_weeks.max(1)));
        let cost = service.resolved_cost(stylist_level_id);

        let mut current = first_date;
        while current <= plan_end {
            let mut snapshot = service.clone();
            snapshot.cost = cost;
            occurrences_by_day.entry(current).or_default().push(snapshot);
            total_cost += cost;
            // New date value per step; appointments never alias a shared date.
            current += step;
        }
    }

    let appointments: Vec<PlanAppointment> = occurrences_by_day
        .into_iter()
        .map(|(date, services)| PlanAppointment { date, services })
        .collect();

    let total_yearly_appointments = appointments.len();
    let average_appointment_cost = if total_yearly_appointments > 0 {
        total_cost as f64 / total_yearly_appointments as f64
    } else {
        0.0
    };
    let average_monthly_spend = total_cost as f64 / 12.0;

    debug!(
        "Generated plan for client {}: {} appointments, total cost {}",
        client.id, total_yearly_appointments, total_cost
    );

    PlanDraft {
        stylist_id: stylist_id.to_string(),
        stylist_name: stylist_name.to_string(),
        client: client.clone(),
        appointments,
        total_yearly_appointments,
        average_appointment_cost,
        average_monthly_spend,
        total_cost,
    }
}

// --- Offset Propagation ---

/// Shifts every appointment on or after `recommended_date` by the difference
/// between the booked and recommended dates, keeping the remainder of the
/// roadmap internally consistent after a real-world scheduling adjustment.
///
/// Appointments before `recommended_date` are left untouched. A zero offset
/// returns an identical schedule.
pub fn shift_future_appointments(
    appointments: &[PlanAppointment],
    recommended_date: NaiveDate,
    booked_date: NaiveDate,
) -> Vec<PlanAppointment> {
    let offset = booked_date.signed_duration_since(recommended_date);

    appointments
        .iter()
        .map(|appointment| {
            if appointment.date >= recommended_date {
                PlanAppointment {
                    date: appointment.date + offset,
                    services: appointment.services.clone(),
                }
            } else {
                appointment.clone()
            }
        })
        .collect()
}

/// Validates that a client identifier is a well-formed UUID.
///
/// Persistence keys plans by client UUID; a malformed id must abort the save
/// before any write is attempted.
pub fn validate_client_id(client: &Client) -> Result<(), PlanError> {
    if client.id.trim().is_empty() {
        return Err(PlanError::InvalidClientId(
            "client id is missing".to_string(),
        ));
    }
    uuid::Uuid::parse_str(&client.id)
        .map(|_| ())
        .map_err(|_| PlanError::InvalidClientId(format!("not a valid UUID: {}", client.id)))
}
