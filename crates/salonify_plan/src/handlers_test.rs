#[cfg(test)]
mod tests {
    use crate::generator::{CreatePlanRequest, RescheduleRequest};
    use crate::handlers::{
        create_plan_handler, get_plan_handler, preview_plan_handler, reschedule_plan_handler,
        save_plan_handler, PlanState,
    };
    use crate::models::PlanDetail;
    use crate::repository::mock::MockPlanRepository;
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::Json;
    use chrono::{Duration, NaiveDate, Utc};
    use salonify_common::models::{Client, Service};
    use salonify_common::services::{BoxFuture, BoxedError, CatalogProvider};
    use salonify_config::{AppConfig, PlanConfig, ServerConfig};
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Catalog stub returning a fixed service list.
    struct FixedCatalog {
        services: Vec<Service>,
    }

    impl CatalogProvider for FixedCatalog {
        type Error = BoxedError;

        fn list_services(&self) -> BoxFuture<'_, Vec<Service>, Self::Error> {
            Box::pin(async move { Ok(self.services.clone()) })
        }

        fn get_service(&self, service_id: &str) -> BoxFuture<'_, Option<Service>, Self::Error> {
            let service_id = service_id.to_string();
            Box::pin(async move {
                Ok(self.services.iter().find(|s| s.id == service_id).cloned())
            })
        }
    }

    fn test_config() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            use_catalog: false,
            use_plans: true,
            database: None,
            catalog: None,
            plan: Some(PlanConfig {
                horizon_days: Some(365),
            }),
        })
    }

    fn catalog_service(id: &str, cost: i64) -> Service {
        Service {
            id: id.to_string(),
            name: format!("Service {}", id),
            category: "Hair".to_string(),
            cost,
            duration_minutes: 45,
            tier_prices: None,
        }
    }

    fn state_with(repository: MockPlanRepository) -> Arc<PlanState> {
        Arc::new(PlanState {
            config: test_config(),
            repository: Arc::new(repository),
            catalog: Arc::new(FixedCatalog {
                services: vec![catalog_service("svc-cut", 9500)],
            }),
        })
    }

    fn request_for(client_id: &str) -> CreatePlanRequest {
        let mut details = HashMap::new();
        details.insert(
            "svc-cut".to_string(),
            PlanDetail {
                first_date: Some(Utc::now().date_naive()),
                frequency_weeks: Some(4),
            },
        );
        CreatePlanRequest {
            client: Client {
                id: client_id.to_string(),
                name: "Dana Keller".to_string(),
                email: None,
                phone: None,
            },
            stylist_id: "stylist-17".to_string(),
            stylist_name: "Robin".to_string(),
            stylist_level_id: None,
            details,
        }
    }

    const CLIENT_UUID: &str = "7b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d";

    #[tokio::test]
    async fn preview_generates_without_persisting() {
        let state = state_with(MockPlanRepository::new());
        let result =
            preview_plan_handler(State(state.clone()), Json(request_for(CLIENT_UUID))).await;

        let Json(draft) = result.expect("preview should succeed");
        assert!(!draft.appointments.is_empty());
        // Nothing was saved.
        let plans = state
            .repository
            .find_by_client(CLIENT_UUID)
            .await
            .expect("lookup should succeed");
        assert!(plans.is_empty());
    }

    #[tokio::test]
    async fn create_plan_persists_and_assigns_identity() {
        let state = state_with(MockPlanRepository::new());
        let result = create_plan_handler(State(state.clone()), Json(request_for(CLIENT_UUID))).await;

        let Json(plan) = result.expect("create should succeed");
        assert!(!plan.id.is_empty());
        assert_eq!(plan.status.as_str(), "draft");
        assert_eq!(plan.membership_status.as_str(), "none");

        let found = state
            .repository
            .find_by_id(&plan.id)
            .await
            .expect("lookup should succeed");
        assert_eq!(found, Some(plan));
    }

    #[tokio::test]
    async fn create_plan_rejects_malformed_client_id() {
        let state = state_with(MockPlanRepository::new());
        let result = create_plan_handler(State(state), Json(request_for("not-a-uuid"))).await;

        let (status, Json(body)) = result.expect_err("create should be rejected");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        // Nothing was generated for a request that never passed validation.
        assert!(body.draft.is_none());
    }

    #[tokio::test]
    async fn failed_create_hands_back_the_draft_for_retry() {
        // When the store rejects the write, the 502 body must carry the
        // computed draft so /plans/save can retry it without regeneration.
        let failing = state_with(MockPlanRepository::failing());
        let (status, Json(body)) =
            create_plan_handler(State(failing), Json(request_for(CLIENT_UUID)))
                .await
                .expect_err("create should fail against a broken store");
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!body.success);
        let draft = body.draft.expect("error body should carry the draft");
        assert!(!draft.appointments.is_empty());

        let working = state_with(MockPlanRepository::new());
        let Json(plan) = save_plan_handler(State(working), Json(draft.clone()))
            .await
            .expect("retry should succeed without regeneration");
        assert_eq!(plan.appointments, draft.appointments);
        assert_eq!(plan.total_cost, draft.total_cost);
    }

    #[tokio::test]
    async fn failed_save_can_be_retried_with_the_same_draft() {
        // Compute once, fail the save, retry the identical draft elsewhere.
        let failing = state_with(MockPlanRepository::failing());
        let Json(draft) =
            preview_plan_handler(State(failing.clone()), Json(request_for(CLIENT_UUID)))
                .await
                .expect("preview should succeed");

        let (status, _) = save_plan_handler(State(failing), Json(draft.clone()))
            .await
            .expect_err("save should fail against a broken store");
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let working = state_with(MockPlanRepository::new());
        let Json(plan) = save_plan_handler(State(working), Json(draft.clone()))
            .await
            .expect("retry should succeed without regeneration");
        assert_eq!(plan.appointments, draft.appointments);
        assert_eq!(plan.total_cost, draft.total_cost);
    }

    #[tokio::test]
    async fn get_plan_returns_404_for_unknown_id() {
        let state = state_with(MockPlanRepository::new());
        let result = get_plan_handler(State(state), Path("missing".to_string())).await;

        let (status, _) = result.expect_err("lookup should fail");
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn reschedule_shifts_the_forward_schedule() {
        let state = state_with(MockPlanRepository::new());
        let Json(plan) = create_plan_handler(State(state.clone()), Json(request_for(CLIENT_UUID)))
            .await
            .expect("create should succeed");

        let recommended: NaiveDate = plan.appointments[1].date;
        let booked = recommended + Duration::days(3);

        let Json(updated) = reschedule_plan_handler(
            State(state),
            Path(plan.id.clone()),
            Json(RescheduleRequest {
                recommended_date: recommended,
                booked_date: booked,
            }),
        )
        .await
        .expect("reschedule should succeed");

        assert_eq!(updated.appointments[0].date, plan.appointments[0].date);
        for (before, after) in plan.appointments[1..]
            .iter()
            .zip(updated.appointments[1..].iter())
        {
            assert_eq!(after.date, before.date + Duration::days(3));
        }
        // Aggregates are date-independent and stay put.
        assert_eq!(updated.total_cost, plan.total_cost);
        assert_eq!(
            updated.total_yearly_appointments,
            plan.total_yearly_appointments
        );
    }
}
