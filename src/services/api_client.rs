// ============================================================================
// API CLIENT - single outbound HTTP pipeline
// ============================================================================
// Every request goes through here. Request shaping attaches the session
// token to all endpoints except the two public ones; response shaping turns
// a 401/403 from a gated endpoint into a re-login prompt before propagating
// the error. One attempt per call: no retry, no backoff.
// ============================================================================

use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::stores::SessionStore;
use crate::utils::API_BASE;

/// Routes reachable without an authorization header.
const PUBLIC_ENDPOINTS: [&str; 2] = ["api-token-auth/", "register/"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// 401/403 from a gated endpoint; the re-login prompt already fired.
    #[error("authentication required (HTTP {status})")]
    AuthRequired { status: u16 },
    /// Any other non-2xx answer (validation, conflict, not found, ...).
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Decode(String),
}

pub fn is_public_endpoint(path: &str) -> bool {
    let path = path.trim_start_matches('/');
    PUBLIC_ENDPOINTS.iter().any(|p| path.starts_with(p))
}

/// Header value for a request, if one applies: public endpoints never carry
/// a token, and gated endpoints only do when a session exists.
pub fn auth_header(path: &str, token: Option<&str>) -> Option<String> {
    if is_public_endpoint(path) {
        return None;
    }
    token.map(|t| format!("Token {}", t))
}

/// Map a failed status to the error taxonomy. 401/403 means "session
/// missing or expired" only on gated endpoints; on the login endpoint it is
/// an ordinary rejection (bad credentials).
pub fn classify_failure(status: u16, path: &str, body: String) -> ApiError {
    if (status == 401 || status == 403) && !is_public_endpoint(path) {
        ApiError::AuthRequired { status }
    } else {
        ApiError::Http { status, body }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
    on_auth_required: Rc<dyn Fn()>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.session == other.session
    }
}

impl ApiClient {
    pub fn new(session: SessionStore, on_auth_required: Rc<dyn Fn()>) -> Self {
        Self {
            base_url: API_BASE.trim_end_matches('/').to_string(),
            session,
            on_auth_required,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn shape(&self, path: &str, builder: RequestBuilder) -> RequestBuilder {
        match auth_header(path, self.session.token().as_deref()) {
            Some(header) => builder.header("Authorization", &header),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_with_query(path, &[]).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = self
            .shape(path, Request::get(&self.url(path)))
            .query(query.iter().map(|(k, v)| (*k, v.as_str())));
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.read_json(path, response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .shape(path, Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.read_json(path, response).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .shape(path, Request::patch(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.read_json(path, response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .shape(path, Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(self.fail(path, response).await)
        }
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        path: &str,
        response: Response,
    ) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(self.fail(path, response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Response shaping for failed calls. Fires the re-login prompt exactly
    /// once per auth failure, then propagates the error to the caller.
    async fn fail(&self, path: &str, response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = classify_failure(status, path, body);
        if let ApiError::AuthRequired { status } = error {
            log::warn!("HTTP {} from {}: session missing or expired", status, path);
            (self.on_auth_required)();
        }
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_and_register_are_public() {
        assert!(is_public_endpoint("api-token-auth/"));
        assert!(is_public_endpoint("register/"));
        assert!(is_public_endpoint("/register/"));
        assert!(!is_public_endpoint("produtos/"));
        assert!(!is_public_endpoint("whoami/"));
    }

    #[test]
    fn no_token_means_no_header() {
        assert_eq!(auth_header("produtos/", None), None);
    }

    #[test]
    fn gated_endpoints_carry_the_token() {
        assert_eq!(
            auth_header("produtos/meus/", Some("abc123")).as_deref(),
            Some("Token abc123")
        );
    }

    #[test]
    fn public_endpoints_never_carry_the_token() {
        assert_eq!(auth_header("api-token-auth/", Some("abc123")), None);
        assert_eq!(auth_header("register/", Some("abc123")), None);
    }

    #[test]
    fn auth_failures_on_gated_endpoints_require_relogin() {
        assert_eq!(
            classify_failure(401, "produtos/meus/", String::new()),
            ApiError::AuthRequired { status: 401 }
        );
        assert_eq!(
            classify_failure(403, "users/3/", String::new()),
            ApiError::AuthRequired { status: 403 }
        );
    }

    #[test]
    fn a_rejected_login_is_not_a_session_expiry() {
        assert_eq!(
            classify_failure(401, "api-token-auth/", "bad credentials".into()),
            ApiError::Http {
                status: 401,
                body: "bad credentials".into()
            }
        );
    }

    #[test]
    fn other_statuses_keep_their_body() {
        assert_eq!(
            classify_failure(400, "feiras/", "invalid date".into()),
            ApiError::Http {
                status: 400,
                body: "invalid date".into()
            }
        );
    }
}
