//! Read-only job board: list and detail pages for jobs, candidates, companies,
//! and applications, rendered from a MongoDB document store.

pub mod config;
pub mod error;
pub mod forms;
pub mod listings;
pub mod pages;
pub mod store;
pub mod telemetry;
