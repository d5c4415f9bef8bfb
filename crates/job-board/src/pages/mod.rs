//! HTML pages for the board: one list page and one detail page per collection.
//!
//! Each handler reads through the [`DocumentAccessor`](crate::store::DocumentAccessor),
//! maps documents to view models, and renders a template that receives exactly one
//! named variable (`jobs`, `job`, `users`, ...).

pub mod router;
pub mod templates;

#[cfg(test)]
mod tests;

pub use router::{page_router, PageError, PageService};
