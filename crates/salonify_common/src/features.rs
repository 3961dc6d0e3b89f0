//! Feature flag handling for the Salonify application.
//!
//! This module provides utilities for working with feature flags in a more
//! maintainable way.
//!
//! ## Available Features
//!
//! - `openapi`: Enables OpenAPI documentation generation
//! - `catalog`: Enables the POS catalog sync
//! - `plans`: Enables the roadmap plan generator and its routes
//!
//! ## Usage
//!
//! Feature flags are used in two ways in the Salonify application:
//!
//! 1. Compile-time feature flags using `#[cfg(feature = "...")]`
//! 2. Runtime feature flags using configuration values
//!
//! This module provides helper functions for checking if features are enabled
//! at runtime based on configuration values.

use salonify_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `use_feature` - The configuration flag that enables the feature
/// * `feature_config` - The configuration section for the feature
///
/// # Returns
///
/// `true` if the feature is enabled, `false` otherwise
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the POS catalog sync is enabled at runtime.
#[cfg(feature = "catalog")]
pub fn is_catalog_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_catalog, config.catalog.as_ref())
}

/// Check if the roadmap plan generator is enabled at runtime.
#[cfg(feature = "plans")]
pub fn is_plans_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_plans, config.plan.as_ref())
}
