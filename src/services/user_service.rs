use crate::models::ManagedUser;
use crate::services::{ApiClient, ApiError};

/// List regular accounts (moderator only).
pub async fn list_users(api: &ApiClient) -> Result<Vec<ManagedUser>, ApiError> {
    api.get("users/").await
}

pub async fn delete_user(api: &ApiClient, id: u32) -> Result<(), ApiError> {
    log::info!("deleting user {}", id);
    api.delete(&format!("users/{}/", id)).await
}
