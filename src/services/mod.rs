pub mod api_client;
pub mod auth_service;
pub mod fair_service;
pub mod product_service;
pub mod user_service;

pub use api_client::{ApiClient, ApiError};
