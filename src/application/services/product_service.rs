//! Read-only product lookups over the persisted snapshot.

use std::sync::Arc;

use crate::domain::entities::ProductRecord;
use crate::domain::repositories::{SnapshotError, SnapshotRepository};
use crate::error::AppError;
use serde_json::json;

/// Service answering product queries from the snapshot.
///
/// The snapshot is reloaded on every call; nothing is cached. A snapshot
/// that cannot be read is logged and treated as empty.
pub struct ProductService<S: SnapshotRepository> {
    snapshot_repository: Arc<S>,
}

impl<S: SnapshotRepository> ProductService<S> {
    /// Creates a new product service.
    pub fn new(snapshot_repository: Arc<S>) -> Self {
        Self {
            snapshot_repository,
        }
    }

    /// Lists every product in snapshot order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the snapshot holds no products.
    pub async fn list_products(&self) -> Result<Vec<ProductRecord>, AppError> {
        let products = self.load().await;

        if products.is_empty() {
            return Err(AppError::not_found("Product data not found", json!({})));
        }

        Ok(products)
    }

    /// Finds the first product whose name matches `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has that name.
    pub async fn get_product(&self, name: &str) -> Result<ProductRecord, AppError> {
        self.load()
            .await
            .into_iter()
            .find(|product| product.name_matches(name))
            .ok_or_else(|| {
                AppError::not_found(
                    format!("Product {} not found", name),
                    json!({ "product": name }),
                )
            })
    }

    /// Returns one field of a product as `(field, value)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist or
    /// `field` is not a record key.
    pub async fn get_product_field(
        &self,
        name: &str,
        field: &str,
    ) -> Result<(String, String), AppError> {
        let product = self.get_product(name).await?;

        product
            .field(field)
            .map(|value| (field.to_string(), value.to_string()))
            .ok_or_else(|| {
                AppError::not_found(
                    format!("Field {} not found for product {}", field, name),
                    json!({ "product": name, "field": field }),
                )
            })
    }

    /// Number of records in the snapshot, or the error that prevents reading it.
    pub async fn snapshot_size(&self) -> Result<usize, SnapshotError> {
        self.snapshot_repository.load().await.map(|products| products.len())
    }

    async fn load(&self) -> Vec<ProductRecord> {
        match self.snapshot_repository.load().await {
            Ok(products) => products,
            Err(e) => {
                tracing::error!("Failed to read snapshot: {}", e);
                Vec::new()
            }
        }
    }
}
