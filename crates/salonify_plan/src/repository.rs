// --- File: crates/salonify_plan/src/repository.rs ---
//! Persistence seam for generated roadmaps.
//!
//! The trait is defined here, next to the domain models, so that database
//! backends can implement it without the plan crate depending on any specific
//! store. The contract: a save either fully succeeds and returns the persisted
//! row, or fails with a reported error and leaves no partial write visible.

use crate::models::{GeneratedPlan, PlanAppointment, PlanDraft};
use salonify_common::services::BoxFuture;
use salonify_common::SalonifyError;

/// Repository for persisted roadmaps.
///
/// Implementations must reject plans whose client identifier is not a
/// well-formed UUID (`SalonifyError::InvalidClientId`) before any write.
pub trait PlanRepository: Send + Sync {
    /// Create the backing schema if it does not exist.
    fn init_schema(&self) -> BoxFuture<'_, (), SalonifyError>;

    /// Persist a freshly generated draft, assigning a new plan id and
    /// `created_at` timestamp. Returns the persisted plan.
    fn save_plan(&self, draft: PlanDraft) -> BoxFuture<'_, GeneratedPlan, SalonifyError>;

    /// Upsert an already-identified plan by id.
    fn upsert_plan(&self, plan: GeneratedPlan) -> BoxFuture<'_, GeneratedPlan, SalonifyError>;

    /// Fetch a plan by id.
    fn find_by_id(&self, plan_id: &str) -> BoxFuture<'_, Option<GeneratedPlan>, SalonifyError>;

    /// List all plans for a client, newest first.
    fn find_by_client(&self, client_id: &str)
        -> BoxFuture<'_, Vec<GeneratedPlan>, SalonifyError>;

    /// Replace a plan's appointment list, leaving aggregates untouched
    /// (they are date-independent). Returns the updated plan.
    fn update_appointments(
        &self,
        plan_id: &str,
        appointments: Vec<PlanAppointment>,
    ) -> BoxFuture<'_, GeneratedPlan, SalonifyError>;

    /// Delete a plan by id. Returns whether a row was removed.
    fn delete_plan(&self, plan_id: &str) -> BoxFuture<'_, bool, SalonifyError>;
}

/// Mock implementation of PlanRepository for testing.
#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::generator::validate_client_id;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory plan repository for handler and flow tests.
    pub struct MockPlanRepository {
        plans: Mutex<HashMap<String, GeneratedPlan>>,
        /// When set, every write fails with a persistence error.
        pub fail_writes: bool,
    }

    impl MockPlanRepository {
        pub fn new() -> Self {
            Self {
                plans: Mutex::new(HashMap::new()),
                fail_writes: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                plans: Mutex::new(HashMap::new()),
                fail_writes: true,
            }
        }
    }

    impl PlanRepository for MockPlanRepository {
        fn init_schema(&self) -> BoxFuture<'_, (), SalonifyError> {
            Box::pin(async { Ok(()) })
        }

        fn save_plan(&self, draft: PlanDraft) -> BoxFuture<'_, GeneratedPlan, SalonifyError> {
            Box::pin(async move {
                validate_client_id(&draft.client)
                    .map_err(|e| SalonifyError::InvalidClientId(e.to_string()))?;
                if self.fail_writes {
                    return Err(SalonifyError::DatabaseError(
                        "simulated write failure".to_string(),
                    ));
                }
                let plan = GeneratedPlan::from_draft(
                    uuid::Uuid::new_v4().to_string(),
                    Utc::now(),
                    draft,
                );
                self.plans
                    .lock()
                    .unwrap()
                    .insert(plan.id.clone(), plan.clone());
                Ok(plan)
            })
        }

        fn upsert_plan(&self, plan: GeneratedPlan) -> BoxFuture<'_, GeneratedPlan, SalonifyError> {
            Box::pin(async move {
                validate_client_id(&plan.client)
                    .map_err(|e| SalonifyError::InvalidClientId(e.to_string()))?;
                if self.fail_writes {
                    return Err(SalonifyError::DatabaseError(
                        "simulated write failure".to_string(),
                    ));
                }
                self.plans
                    .lock()
                    .unwrap()
                    .insert(plan.id.clone(), plan.clone());
                Ok(plan)
            })
        }

        fn find_by_id(&self, plan_id: &str) -> BoxFuture<'_, Option<GeneratedPlan>, SalonifyError> {
            let plan_id = plan_id.to_string();
            Box::pin(async move { Ok(self.plans.lock().unwrap().get(&plan_id).cloned()) })
        }

        fn find_by_client(
            &self,
            client_id: &str,
        ) -> BoxFuture<'_, Vec<GeneratedPlan>, SalonifyError> {
            let client_id = client_id.to_string();
            Box::pin(async move {
                let plans = self.plans.lock().unwrap();
                let mut matching: Vec<GeneratedPlan> = plans
                    .values()
                    .filter(|p| p.client.id == client_id)
                    .cloned()
                    .collect();
                matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                Ok(matching)
            })
        }

        fn update_appointments(
            &self,
            plan_id: &str,
            appointments: Vec<PlanAppointment>,
        ) -> BoxFuture<'_, GeneratedPlan, SalonifyError> {
            let plan_id = plan_id.to_string();
            Box::pin(async move {
                if self.fail_writes {
                    return Err(SalonifyError::DatabaseError(
                        "simulated write failure".to_string(),
                    ));
                }
                let mut plans = self.plans.lock().unwrap();
                let plan = plans
                    .get_mut(&plan_id)
                    .ok_or_else(|| SalonifyError::NotFoundError(plan_id.clone()))?;
                plan.appointments = appointments;
                Ok(plan.clone())
            })
        }

        fn delete_plan(&self, plan_id: &str) -> BoxFuture<'_, bool, SalonifyError> {
            let plan_id = plan_id.to_string();
            Box::pin(async move { Ok(self.plans.lock().unwrap().remove(&plan_id).is_some()) })
        }
    }
}
