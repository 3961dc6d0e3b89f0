// --- File: crates/salonify_catalog/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod handlers;
pub mod routes;
pub mod service;
#[cfg(test)]
mod service_test;

pub use service::{CatalogError, HttpCatalogProvider};
