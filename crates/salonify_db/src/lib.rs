//! Database integration for Salonify
//!
//! This crate provides a database client that is designed to be database agnostic,
//! using SQLx as the underlying database library, plus the SQL implementation of
//! the roadmap plan repository. It supports SQLite, PostgreSQL, and MySQL through
//! feature flags.
//!
//! # Example
//!
//! ```rust,no_run
//! use salonify_db::{DbClient, SqlPlanRepository};
//!
//! async fn setup() -> Result<SqlPlanRepository, Box<dyn std::error::Error>> {
//!     let db_client = DbClient::from_url("sqlite:salonify.db").await?;
//!     Ok(SqlPlanRepository::new(db_client))
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;

// Register the SQLite driver when the crate is loaded
#[cfg(feature = "sqlite")]
mod sqlite_driver {
    // This import ensures the SQLite driver is linked and registered
    #[allow(unused_imports)]
    use sqlx::sqlite::SqlitePoolOptions as _;
}

// Re-export the client, factory, and repository for ease of use
pub use client::DbClient;
pub use error::DbError;
pub use factory::DbClientFactory;
pub use repositories::SqlPlanRepository;
