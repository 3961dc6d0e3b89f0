// --- File: crates/salonify_catalog/src/service.rs ---
//! POS catalog provider implementation.
//!
//! This module implements the CatalogProvider trait against the salon's POS
//! platform. The POS exposes the service catalog over HTTP; the wire shape is
//! mapped into the shared [`Service`] model here so nothing downstream needs
//! to know about the POS payload format.

use once_cell::sync::Lazy;
use reqwest::Client as ReqwestClient;
use salonify_common::models::Service;
use salonify_common::services::{BoxFuture, CatalogProvider};
use salonify_config::CatalogConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog API request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Catalog API returned an error: Status={status}, Message='{message}'")]
    ApiError { status: String, message: String },
    #[error("Failed to parse catalog API response: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Catalog configuration missing or incomplete")]
    ConfigError,
}

// --- Static HTTP Client ---
// Reused for all catalog calls within this crate.
static HTTP_CLIENT: Lazy<ReqwestClient> = Lazy::new(ReqwestClient::new);

const DEFAULT_TIMEOUT_SECS: u64 = 10;

// --- Structures for the POS Catalog API Response ---

/// One catalog item as the POS returns it. Prices arrive in minor units.
#[derive(Deserialize, Debug)]
pub(crate) struct WireCatalogItem {
    id: String,
    name: String,
    #[serde(default)]
    category: Option<String>,
    price: i64,
    #[serde(default)]
    duration_minutes: Option<i64>,
    /// Stylist-level price overrides keyed by level id, in minor units.
    #[serde(default)]
    tier_prices: Option<HashMap<String, i64>>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct WireCatalogResponse {
    #[serde(default)]
    pub(crate) services: Vec<WireCatalogItem>,
}

impl From<WireCatalogItem> for Service {
    fn from(item: WireCatalogItem) -> Self {
        Service {
            id: item.id,
            name: item.name,
            category: item.category.unwrap_or_else(|| "Uncategorized".to_string()),
            cost: item.price,
            duration_minutes: item.duration_minutes.unwrap_or(0),
            tier_prices: item.tier_prices,
        }
    }
}

/// Catalog provider backed by the POS platform's HTTP API.
pub struct HttpCatalogProvider {
    config: CatalogConfig,
}

impl HttpCatalogProvider {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    async fn fetch_catalog(&self) -> Result<Vec<Service>, CatalogError> {
        let url = format!(
            "{}/catalog/services",
            self.config.base_url.trim_end_matches('/')
        );
        debug!("Fetching service catalog from {}", url);

        let mut request = HTTP_CLIENT.get(&url).timeout(self.timeout());
        if let Some(token) = self.config.access_token.as_deref() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().to_string();
            let message = response.text().await.unwrap_or_default();
            warn!("Catalog API error: {} {}", status, message);
            return Err(CatalogError::ApiError { status, message });
        }

        let body: WireCatalogResponse = response.json().await?;
        Ok(body.services.into_iter().map(Service::from).collect())
    }
}

impl CatalogProvider for HttpCatalogProvider {
    type Error = CatalogError;

    fn list_services(&self) -> BoxFuture<'_, Vec<Service>, Self::Error> {
        Box::pin(async move { self.fetch_catalog().await })
    }

    fn get_service(&self, service_id: &str) -> BoxFuture<'_, Option<Service>, Self::Error> {
        let service_id = service_id.to_string();
        Box::pin(async move {
            let services = self.fetch_catalog().await?;
            Ok(services.into_iter().find(|s| s.id == service_id))
        })
    }
}

/// Mock implementation of CatalogProvider for testing.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// In-memory catalog for handler and flow tests.
    pub struct MockCatalogProvider {
        services: Mutex<Vec<Service>>,
    }

    impl MockCatalogProvider {
        pub fn new(services: Vec<Service>) -> Self {
            Self {
                services: Mutex::new(services),
            }
        }
    }

    impl CatalogProvider for MockCatalogProvider {
        type Error = CatalogError;

        fn list_services(&self) -> BoxFuture<'_, Vec<Service>, Self::Error> {
            Box::pin(async move { Ok(self.services.lock().unwrap().clone()) })
        }

        fn get_service(&self, service_id: &str) -> BoxFuture<'_, Option<Service>, Self::Error> {
            let service_id = service_id.to_string();
            Box::pin(async move {
                Ok(self
                    .services
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|s| s.id == service_id)
                    .cloned())
            })
        }
    }
}
