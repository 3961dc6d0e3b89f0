// --- File: crates/services/salonify_backend/src/app_state.rs ---
use salonify_common::services::ServiceFactory;
use salonify_config::AppConfig;
use salonify_db::{DbClient, SqlPlanRepository};
use salonify_plan::repository::PlanRepository;
use std::sync::Arc;
use tracing::{error, info};

use crate::service_factory::SalonifyServiceFactory;

/// Application state shared across all routes.
///
/// Holds the loaded configuration plus the collaborators the feature routers
/// need: the service factory for outbound integrations and the plan
/// repository for persistence. Routers take `Arc` clones of what they use.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    #[allow(dead_code)]
    pub service_factory: Arc<dyn ServiceFactory>,
    /// Present when the database is configured and reachable.
    pub plan_repository: Option<Arc<dyn PlanRepository>>,
}

impl AppState {
    /// Create a new AppState from the loaded configuration.
    ///
    /// Connects to the database and initializes the plan schema when a
    /// database section is configured. A missing or unreachable database is
    /// reported but not fatal; plan routes are simply not mounted.
    pub async fn new(config: Arc<AppConfig>) -> Self {
        let service_factory = Arc::new(SalonifyServiceFactory::new(config.clone()));

        let plan_repository: Option<Arc<dyn PlanRepository>> = if config.database.is_some() {
            match DbClient::new(&config).await {
                Ok(db_client) => {
                    let repository = SqlPlanRepository::new(db_client);
                    match repository.init_schema().await {
                        Ok(()) => {
                            info!("Plan repository initialized.");
                            Some(Arc::new(repository))
                        }
                        Err(e) => {
                            error!("Failed to initialize plan schema: {}", e);
                            None
                        }
                    }
                }
                Err(e) => {
                    error!("Failed to connect to database: {}", e);
                    None
                }
            }
        } else {
            info!("No database configured; plan persistence disabled.");
            None
        };

        Self {
            config,
            service_factory,
            plan_repository,
        }
    }
}
