// --- File: crates/services/salonify_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! This module provides an implementation of the ServiceFactory trait for the backend service.
use salonify_catalog::HttpCatalogProvider;
use salonify_common::is_feature_enabled;
use salonify_common::services::{BoxedCatalogProvider, BoxedError, CatalogProvider, ServiceFactory};
use salonify_config::AppConfig;
use std::sync::Arc;
use tracing::info;

/// Service factory implementation.
///
/// Initializes external-service instances based on the application
/// configuration and runtime flags, and hands them out through the
/// `ServiceFactory` trait. Routes receive their collaborators from here
/// instead of constructing them, which keeps the wiring in one place and
/// makes handler tests trivial to set up with mocks.
pub struct SalonifyServiceFactory {
    #[allow(dead_code)]
    config: Arc<AppConfig>,
    catalog_provider: Option<Arc<dyn CatalogProvider<Error = BoxedError>>>,
}

impl SalonifyServiceFactory {
    /// Create a new service factory.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let mut factory = Self {
            config: config.clone(),
            catalog_provider: None,
        };

        if is_feature_enabled(&config, config.use_catalog, config.catalog.as_ref()) {
            if let Some(catalog_config) = config.catalog.clone() {
                info!("Initializing POS catalog provider...");
                let provider = HttpCatalogProvider::new(catalog_config);
                factory.catalog_provider =
                    Some(Arc::new(BoxedCatalogProvider(Arc::new(provider))));
                info!("POS catalog provider initialized.");
            }
        } else {
            info!("Catalog sync disabled via runtime config or missing catalog config section.");
        }

        factory
    }
}

impl ServiceFactory for SalonifyServiceFactory {
    fn catalog_provider(&self) -> Option<Arc<dyn CatalogProvider<Error = BoxedError>>> {
        self.catalog_provider.clone()
    }
}
