use crate::models::{Fair, FairPayload};
use crate::services::{ApiClient, ApiError};

pub async fn list_fairs(api: &ApiClient) -> Result<Vec<Fair>, ApiError> {
    api.get("feiras/").await
}

pub async fn create_fair(api: &ApiClient, payload: &FairPayload) -> Result<Fair, ApiError> {
    log::info!("creating fair");
    api.post("feiras/", payload).await
}

/// Partial update: only the fields set in the payload are sent.
pub async fn update_fair(api: &ApiClient, id: u32, payload: &FairPayload) -> Result<Fair, ApiError> {
    log::info!("updating fair {}", id);
    api.patch(&format!("feiras/{}/", id), payload).await
}

pub async fn delete_fair(api: &ApiClient, id: u32) -> Result<(), ApiError> {
    log::info!("deleting fair {}", id);
    api.delete(&format!("feiras/{}/", id)).await
}
