// --- File: crates/salonify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via APP_DATABASE__URL or DATABASE_URL
}

// --- POS Catalog Config ---
// Holds non-secret catalog sync config. The access token is loaded
// directly from the CATALOG_ACCESS_TOKEN env var.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CatalogConfig {
    pub base_url: String, // Mandatory
    pub access_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

// --- Plan Generator Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlanConfig {
    /// Forward horizon for generated roadmaps, in days. Defaults to one year.
    pub horizon_days: Option<i64>,
}

impl PlanConfig {
    pub const DEFAULT_HORIZON_DAYS: i64 = 365;

    pub fn horizon_days(&self) -> i64 {
        self.horizon_days.unwrap_or(Self::DEFAULT_HORIZON_DAYS)
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_catalog: bool,
    #[serde(default)]
    pub use_plans: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>, // Central DB config
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,
    #[serde(default)]
    pub plan: Option<PlanConfig>,
}
