//! REST API layer for the product lookup service.
//!
//! # Modules
//!
//! - [`dto`] - Response shapes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
