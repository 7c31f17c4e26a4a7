//! Data Transfer Objects for API responses.
//!
//! Product records are served as-is from the snapshot; only the health
//! report and single-field lookups have dedicated shapes.

pub mod health;
pub mod product;
