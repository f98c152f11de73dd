use crate::models::{LoginRequest, RegisterRequest, TokenResponse, WhoAmI};
use crate::services::{ApiClient, ApiError};

/// Exchange credentials for an API token. The endpoint is public, so the
/// client never attaches a stale token to it.
pub async fn login(api: &ApiClient, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    log::info!("logging in as {}", username);
    api.post("api-token-auth/", &body).await
}

/// Create a new account. Callers clear any stored session first so the
/// registration never rides on an old identity.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<serde_json::Value, ApiError> {
    log::info!("registering account {}", request.username);
    api.post("register/", request).await
}

/// Identity lookup for the logged-in user (username, groups, superuser flag).
pub async fn whoami(api: &ApiClient) -> Result<WhoAmI, ApiError> {
    api.get("whoami/").await
}
