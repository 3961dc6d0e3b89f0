//! SQL implementation of the plan repository
//!
//! Plans are stored as one row per plan: the indexed columns (`id`,
//! `client_id`, `created_at`) drive lookups and ordering, the full plan is
//! kept as a JSON document in `plan_json`. Appointments never need to be
//! queried individually, so a row-per-appointment schema would only add
//! write amplification.

use crate::error::DbError;
use crate::DbClient;
use chrono::Utc;
use salonify_common::services::BoxFuture;
use salonify_common::SalonifyError;
use salonify_plan::models::{GeneratedPlan, PlanAppointment, PlanDraft};
use salonify_plan::repository::PlanRepository;
use sqlx::Row;
use tracing::{debug, error, info};
use uuid::Uuid;

/// SQL implementation of the plan repository
#[derive(Debug, Clone)]
pub struct SqlPlanRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlPlanRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    /// A plan row must never be written for a malformed client id.
    fn check_client_id(client_id: &str) -> Result<(), DbError> {
        if client_id.trim().is_empty() {
            return Err(DbError::InvalidClientId(
                "client id is missing".to_string(),
            ));
        }
        Uuid::parse_str(client_id).map_err(|_| {
            DbError::InvalidClientId(format!("client id is not a UUID: {}", client_id))
        })?;
        Ok(())
    }

    async fn create_schema(&self) -> Result<(), DbError> {
        debug!("Initializing roadmap plan schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS roadmap_plans (
                id TEXT PRIMARY KEY,
                client_id TEXT NOT NULL,
                created_at TEXT NOT NULL,
                plan_json TEXT NOT NULL
            )
        "#;
        self.db_client.execute(query).await?;

        let index = r#"
            CREATE INDEX IF NOT EXISTS idx_roadmap_plans_client_id
            ON roadmap_plans (client_id)
        "#;
        self.db_client.execute(index).await?;

        info!("Roadmap plan schema initialized successfully");
        Ok(())
    }

    async fn insert_row(&self, plan: &GeneratedPlan) -> Result<(), DbError> {
        let plan_json = serde_json::to_string(plan)?;

        let query = r#"
            INSERT INTO roadmap_plans (id, client_id, created_at, plan_json)
            VALUES ($1, $2, $3, $4)
        "#;

        sqlx::query(query)
            .bind(&plan.id)
            .bind(&plan.client.id)
            .bind(plan.created_at.to_rfc3339())
            .bind(&plan_json)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert plan {}: {}", plan.id, e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(())
    }

    async fn update_row(&self, plan: &GeneratedPlan) -> Result<(), DbError> {
        let plan_json = serde_json::to_string(plan)?;

        let query = r#"
            UPDATE roadmap_plans
            SET client_id = $1, created_at = $2, plan_json = $3
            WHERE id = $4
        "#;

        let result = sqlx::query(query)
            .bind(&plan.client.id)
            .bind(plan.created_at.to_rfc3339())
            .bind(&plan_json)
            .bind(&plan.id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update plan {}: {}", plan.id, e);
                DbError::QueryError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound(format!("Plan not found: {}", plan.id)));
        }
        Ok(())
    }

    async fn load_by_id(&self, plan_id: &str) -> Result<Option<GeneratedPlan>, DbError> {
        let query = r#"
            SELECT plan_json FROM roadmap_plans WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(plan_id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to load plan {}: {}", plan_id, e);
                DbError::QueryError(e.to_string())
            })?;

        match row {
            Some(row) => {
                let plan_json: String = row
                    .try_get("plan_json")
                    .map_err(|e| DbError::QueryError(e.to_string()))?;
                Ok(Some(serde_json::from_str(&plan_json)?))
            }
            None => Ok(None),
        }
    }

    async fn load_by_client(&self, client_id: &str) -> Result<Vec<GeneratedPlan>, DbError> {
        debug!("Finding all plans for client: {}", client_id);

        // RFC3339 timestamps sort chronologically as text.
        let query = r#"
            SELECT plan_json FROM roadmap_plans
            WHERE client_id = $1
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(client_id)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list plans for {}: {}", client_id, e);
                DbError::QueryError(e.to_string())
            })?;

        let mut plans = Vec::with_capacity(rows.len());
        for row in rows {
            let plan_json: String = row
                .try_get("plan_json")
                .map_err(|e| DbError::QueryError(e.to_string()))?;
            plans.push(serde_json::from_str(&plan_json)?);
        }
        Ok(plans)
    }

    async fn insert_draft(&self, draft: PlanDraft) -> Result<GeneratedPlan, DbError> {
        Self::check_client_id(&draft.client.id)?;

        let plan = GeneratedPlan::from_draft(Uuid::new_v4().to_string(), Utc::now(), draft);
        self.insert_row(&plan).await?;

        info!("Saved plan {} for client {}", plan.id, plan.client.id);
        Ok(plan)
    }

    async fn store_plan(&self, plan: GeneratedPlan) -> Result<GeneratedPlan, DbError> {
        Self::check_client_id(&plan.client.id)?;

        if self.load_by_id(&plan.id).await?.is_some() {
            self.update_row(&plan).await?;
        } else {
            self.insert_row(&plan).await?;
        }
        Ok(plan)
    }

    async fn replace_appointments(
        &self,
        plan_id: &str,
        appointments: Vec<PlanAppointment>,
    ) -> Result<GeneratedPlan, DbError> {
        let mut plan = self
            .load_by_id(plan_id)
            .await?
            .ok_or_else(|| DbError::NotFound(format!("Plan not found: {}", plan_id)))?;

        plan.appointments = appointments;
        self.update_row(&plan).await?;
        Ok(plan)
    }

    async fn remove_plan(&self, plan_id: &str) -> Result<bool, DbError> {
        let query = r#"
            DELETE FROM roadmap_plans WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(plan_id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete plan {}: {}", plan_id, e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}

impl PlanRepository for SqlPlanRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), SalonifyError> {
        Box::pin(async move { Ok(self.create_schema().await?) })
    }

    fn save_plan(&self, draft: PlanDraft) -> BoxFuture<'_, GeneratedPlan, SalonifyError> {
        Box::pin(async move { Ok(self.insert_draft(draft).await?) })
    }

    fn upsert_plan(&self, plan: GeneratedPlan) -> BoxFuture<'_, GeneratedPlan, SalonifyError> {
        Box::pin(async move { Ok(self.store_plan(plan).await?) })
    }

    fn find_by_id(&self, plan_id: &str) -> BoxFuture<'_, Option<GeneratedPlan>, SalonifyError> {
        let plan_id = plan_id.to_string();
        Box::pin(async move { Ok(self.load_by_id(&plan_id).await?) })
    }

    fn find_by_client(
        &self,
        client_id: &str,
    ) -> BoxFuture<'_, Vec<GeneratedPlan>, SalonifyError> {
        let client_id = client_id.to_string();
        Box::pin(async move { Ok(self.load_by_client(&client_id).await?) })
    }

    fn update_appointments(
        &self,
        plan_id: &str,
        appointments: Vec<PlanAppointment>,
    ) -> BoxFuture<'_, GeneratedPlan, SalonifyError> {
        let plan_id = plan_id.to_string();
        Box::pin(async move { Ok(self.replace_appointments(&plan_id, appointments).await?) })
    }

    fn delete_plan(&self, plan_id: &str) -> BoxFuture<'_, bool, SalonifyError> {
        let plan_id = plan_id.to_string();
        Box::pin(async move { Ok(self.remove_plan(&plan_id).await?) })
    }
}
