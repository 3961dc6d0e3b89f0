// --- File: crates/salonify_plan/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod generator;
#[cfg(test)]
mod generator_proptest;
pub mod handlers;
#[cfg(test)]
mod handlers_test;
pub mod models;
pub mod repository;
pub mod routes;
