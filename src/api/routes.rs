//! Lookup route configuration.
//!
//! All endpoints are public and read-only.

use crate::api::handlers::{
    all_products_handler, health_handler, product_field_handler, product_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Product lookup and health routes.
///
/// # Endpoints
///
/// - `GET /all_products`                              - Whole catalog
/// - `GET /products/{product_name}`                   - One product, case-insensitive name
/// - `GET /products/{product_name}/{product_field}`   - One field of one product
/// - `GET /health`                                    - Snapshot readability
pub fn lookup_routes() -> Router<AppState> {
    Router::new()
        .route("/all_products", get(all_products_handler))
        .route("/products/{product_name}", get(product_handler))
        .route(
            "/products/{product_name}/{product_field}",
            get(product_field_handler),
        )
        .route("/health", get(health_handler))
}
