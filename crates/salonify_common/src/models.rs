// --- File: crates/salonify_common/src/models.rs ---

// This file contains data structures and models that are common across the application.
// The catalog crate produces them from the POS sync, the plan crate consumes them as
// generation input; keeping them here avoids a dependency between the two.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A sellable salon offering, as synced from the POS catalog.
///
/// Costs are carried in minor currency units (cents) to avoid floating point
/// drift in financial aggregates. `tier_prices` maps a stylist-level id to an
/// overridden cost; a missing entry means the base `cost` applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Service {
    /// Opaque identifier, stable within a catalog.
    pub id: String,
    pub name: String,
    pub category: String,
    /// Base cost in minor currency units.
    pub cost: i64,
    /// Appointment length in minutes.
    pub duration_minutes: i64,
    /// Per-stylist-level cost overrides, keyed by stylist level id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_prices: Option<HashMap<String, i64>>,
}

impl Service {
    /// Resolve the cost to charge for the given stylist level.
    ///
    /// Falls back to the base cost when the service has no tier prices or the
    /// level has no entry. Never fails.
    pub fn resolved_cost(&self, stylist_level_id: Option<&str>) -> i64 {
        match (self.tier_prices.as_ref(), stylist_level_id) {
            (Some(tiers), Some(level)) => tiers.get(level).copied().unwrap_or(self.cost),
            _ => self.cost,
        }
    }
}

/// The client a plan is generated for.
///
/// `id` must be a well-formed UUID before the plan can be persisted; the
/// persistence layer enforces this, callers should validate early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiered_service() -> Service {
        let mut tiers = HashMap::new();
        tiers.insert("senior".to_string(), 12000);
        Service {
            id: "svc-1".to_string(),
            name: "Cut & Style".to_string(),
            category: "Hair".to_string(),
            cost: 9500,
            duration_minutes: 45,
            tier_prices: Some(tiers),
        }
    }

    #[test]
    fn resolved_cost_uses_tier_override() {
        let service = tiered_service();
        assert_eq!(service.resolved_cost(Some("senior")), 12000);
    }

    #[test]
    fn resolved_cost_falls_back_for_unknown_level() {
        let service = tiered_service();
        assert_eq!(service.resolved_cost(Some("junior")), 9500);
    }

    #[test]
    fn resolved_cost_without_tiers_or_level() {
        let mut service = tiered_service();
        service.tier_prices = None;
        assert_eq!(service.resolved_cost(Some("senior")), 9500);
        assert_eq!(service.resolved_cost(None), 9500);
    }
}
