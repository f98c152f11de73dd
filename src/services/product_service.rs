use crate::models::{Product, ProductFilter, ProductPayload};
use crate::services::{ApiClient, ApiError};

/// Public catalog listing with optional name / max-price filters. The whole
/// collection comes back at once; pagination happens client-side.
pub async fn list_products(api: &ApiClient, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
    let pairs = filter.query_pairs();
    api.get_with_query("produtos/", &pairs).await
}

/// Products owned by the logged-in producer.
pub async fn my_products(api: &ApiClient) -> Result<Vec<Product>, ApiError> {
    api.get("produtos/meus/").await
}

pub async fn create_product(api: &ApiClient, payload: &ProductPayload) -> Result<Product, ApiError> {
    log::info!("creating product");
    api.post("produtos/", payload).await
}

/// Partial update of one product; unset payload fields stay untouched.
pub async fn update_product(
    api: &ApiClient,
    id: u32,
    payload: &ProductPayload,
) -> Result<Product, ApiError> {
    log::info!("updating product {}", id);
    api.patch(&format!("produtos/{}/", id), payload).await
}

pub async fn delete_product(api: &ApiClient, id: u32) -> Result<(), ApiError> {
    log::info!("deleting product {}", id);
    api.delete(&format!("produtos/{}/", id)).await
}
