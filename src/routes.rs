//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /all_products`                 - Whole catalog
//! - `GET /products/{name}`              - Single product
//! - `GET /products/{name}/{field}`      - Single field
//! - `GET /health`                       - Snapshot check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/all_products/`
//!   is served like `/all_products`

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::lookup_routes()
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
