//! Shared state injected into lookup handlers.

use std::sync::Arc;

use crate::application::services::ProductService;
use crate::infrastructure::persistence::JsonSnapshotRepository;

#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService<JsonSnapshotRepository>>,
}

impl AppState {
    pub fn new(snapshot_repository: Arc<JsonSnapshotRepository>) -> Self {
        Self {
            product_service: Arc::new(ProductService::new(snapshot_repository)),
        }
    }
}
