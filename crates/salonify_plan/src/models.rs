// --- File: crates/salonify_plan/src/models.rs ---
//! Domain models for generated roadmaps.
//!
//! A roadmap (plan) is a one-year forward schedule of recurring service
//! appointments for a single client. The generator produces a [`PlanDraft`];
//! the persistence layer assigns identity and lifecycle fields to make it a
//! [`GeneratedPlan`]. Appointments carry snapshot copies of services so later
//! catalog edits do not retroactively alter historical plans.

use chrono::{DateTime, NaiveDate, Utc};
use salonify_common::models::{Client, Service};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a generated plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum PlanStatus {
    Draft,
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Draft => "draft",
            PlanStatus::Active => "active",
            PlanStatus::Paused => "paused",
            PlanStatus::Completed => "completed",
            PlanStatus::Cancelled => "cancelled",
        }
    }
}

/// Membership offer state, tracked independently of the plan lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum MembershipStatus {
    None,
    Offered,
    Active,
}

impl MembershipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::None => "none",
            MembershipStatus::Offered => "offered",
            MembershipStatus::Active => "active",
        }
    }
}

/// Per-service recurrence configuration entered by the operator.
///
/// Both fields start out unset while the wizard is in progress; a service only
/// contributes to generation once both are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlanDetail {
    /// First occurrence, as a calendar date in local time.
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-06-02"))]
    pub first_date: Option<NaiveDate>,
    /// Weeks between repeats. Values below 1 are clamped by the generator.
    #[cfg_attr(feature = "openapi", schema(example = 4))]
    pub frequency_weeks: Option<u32>,
}

impl PlanDetail {
    /// Whether this detail qualifies the service for generation.
    pub fn is_complete(&self) -> bool {
        self.first_date.is_some() && self.frequency_weeks.is_some()
    }
}

/// One scheduled occurrence: a calendar day and the services happening on it.
///
/// Time-of-day is not significant; two occurrences on the same calendar day
/// are always merged into a single appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlanAppointment {
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-06-02"))]
    pub date: NaiveDate,
    /// Snapshot copies of the services occurring this day; never empty.
    pub services: Vec<Service>,
}

impl PlanAppointment {
    /// Sum of the (already tier-resolved) costs of this day's services.
    pub fn day_cost(&self) -> i64 {
        self.services.iter().map(|s| s.cost).sum()
    }
}

/// The generator's output: everything the persistence layer needs except
/// identity and lifecycle fields, which the caller assigns.
///
/// The four aggregate fields are fully determined by `appointments` and are
/// never independently mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlanDraft {
    pub stylist_id: String,
    pub stylist_name: String,
    pub client: Client,
    /// Day-merged appointments, sorted ascending by date.
    pub appointments: Vec<PlanAppointment>,
    pub total_yearly_appointments: usize,
    /// Mean cost per appointment in minor units; 0 for an empty plan.
    pub average_appointment_cost: f64,
    /// Projected monthly spend in minor units over the one-year horizon.
    pub average_monthly_spend: f64,
    /// Total cost in minor units across every individual service occurrence.
    pub total_cost: i64,
}

/// A persisted roadmap, as stored by and returned from the plan repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GeneratedPlan {
    pub id: String,
    pub status: PlanStatus,
    pub membership_status: MembershipStatus,
    pub created_at: DateTime<Utc>,
    pub stylist_id: String,
    pub stylist_name: String,
    pub client: Client,
    pub appointments: Vec<PlanAppointment>,
    pub total_yearly_appointments: usize,
    pub average_appointment_cost: f64,
    pub average_monthly_spend: f64,
    pub total_cost: i64,
}

impl GeneratedPlan {
    /// Promote a draft into a persisted plan with caller-assigned identity.
    ///
    /// New plans start in `draft` status with no membership offer.
    pub fn from_draft(id: String, created_at: DateTime<Utc>, draft: PlanDraft) -> Self {
        Self {
            id,
            status: PlanStatus::Draft,
            membership_status: MembershipStatus::None,
            created_at,
            stylist_id: draft.stylist_id,
            stylist_name: draft.stylist_name,
            client: draft.client,
            appointments: draft.appointments,
            total_yearly_appointments: draft.total_yearly_appointments,
            average_appointment_cost: draft.average_appointment_cost,
            average_monthly_spend: draft.average_monthly_spend,
            total_cost: draft.total_cost,
        }
    }
}
