//! Repository modules for database access
//!
//! This module contains repository implementations for the database entities.
//! The `PlanRepository` trait itself lives in `salonify_plan`, next to the
//! domain models; this crate supplies the SQL-backed implementation.

pub mod plan_sql;

// Re-export the plan repository implementation for ease of use
pub use plan_sql::SqlPlanRepository;
