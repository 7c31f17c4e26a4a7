//! Handlers for product lookups.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::api::dto::product::field_response;
use crate::domain::entities::ProductRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the whole catalog.
///
/// # Endpoint
///
/// `GET /all_products`
///
/// # Errors
///
/// Returns 404 Not Found if the snapshot is missing, unreadable or empty.
pub async fn all_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductRecord>>, AppError> {
    let products = state.product_service.list_products().await?;

    Ok(Json(products))
}

/// Returns the first product whose name matches, ignoring case.
///
/// # Endpoint
///
/// `GET /products/{product_name}`
///
/// # Errors
///
/// Returns 404 Not Found if no product has that name.
pub async fn product_handler(
    State(state): State<AppState>,
    Path(product_name): Path<String>,
) -> Result<Json<ProductRecord>, AppError> {
    let product = state.product_service.get_product(&product_name).await?;

    Ok(Json(product))
}

/// Returns a single field of a product.
///
/// # Endpoint
///
/// `GET /products/{product_name}/{product_field}`
///
/// # Response
///
/// ```json
/// { "calories": "539" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the product or the field does not exist.
pub async fn product_field_handler(
    State(state): State<AppState>,
    Path((product_name, product_field)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let (field, value) = state
        .product_service
        .get_product_field(&product_name, &product_field)
        .await?;

    Ok(Json(field_response(field, value)))
}
