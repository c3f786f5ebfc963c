//! Auth API calls
//!
//! Thin wrappers over the browser fetch API for the three auth endpoints.
//! There are no retries, backoff, or timeouts: failures surface to the
//! caller as-is and the form layer decides what to show.

use serde::Serialize;

use super::claims::TokenPair;

/// API call errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network failure, no window)
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response body could not be interpreted
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    /// API calls are client-side only
    #[error("Not available on the server")]
    Unavailable,
}

/// Registration payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Sign-in payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Refresh payload: the stored refresh token plus the current username
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
    pub username: String,
}

/// Error body the API returns alongside non-success statuses
#[cfg(not(feature = "ssr"))]
#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Post a registration payload. The server response is passed through
/// unchanged; no tokens are issued on sign-up.
#[cfg(not(feature = "ssr"))]
pub async fn sign_up(request: &SignUpRequest) -> Result<serde_json::Value, ApiError> {
    let resp = post_json(crate::core::routes::USERS, request).await?;
    read_body(resp).await
}

/// Post credentials and receive a token pair. Persisting the pair is the
/// caller's job (via the session).
#[cfg(not(feature = "ssr"))]
pub async fn sign_in(request: &SignInRequest) -> Result<TokenPair, ApiError> {
    let resp = post_json(crate::core::routes::TOKENS_CREATE, request).await?;
    let body = read_body(resp).await?;
    serde_json::from_value(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

/// Exchange a refresh token for a new token pair. As with sign-in, the
/// caller persists the renewed pair.
#[cfg(not(feature = "ssr"))]
pub async fn refresh(request: &RefreshRequest) -> Result<TokenPair, ApiError> {
    let resp = post_json(crate::core::routes::TOKENS_CREATE_REFRESH, request).await?;
    let body = read_body(resp).await?;
    serde_json::from_value(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

#[cfg(not(feature = "ssr"))]
async fn post_json<T: Serialize>(path: &str, payload: &T) -> Result<web_sys::Response, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or_else(|| ApiError::Network("No window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(
        &serde_json::to_string(payload)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?
            .into(),
    );

    let req = Request::new_with_str_and_init(path, &opts)
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    req.headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    Ok(resp)
}

/// Read the response body as JSON, turning non-success statuses into
/// [`ApiError::Server`] with the server-reported message when one exists.
#[cfg(not(feature = "ssr"))]
async fn read_body(resp: web_sys::Response) -> Result<serde_json::Value, ApiError> {
    use wasm_bindgen_futures::JsFuture;

    let ok = resp.ok();
    let status = resp.status();

    let json = match resp.json() {
        Ok(promise) => JsFuture::from(promise).await.ok(),
        Err(_) => None,
    };
    let body: serde_json::Value = json
        .and_then(|value| serde_wasm_bindgen::from_value(value).ok())
        .unwrap_or(serde_json::Value::Null);

    if ok {
        Ok(body)
    } else {
        let message = serde_json::from_value::<ErrorResponse>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| resp.status_text());
        Err(ApiError::Server { status, message })
    }
}

#[cfg(feature = "ssr")]
pub async fn sign_up(_request: &SignUpRequest) -> Result<serde_json::Value, ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(feature = "ssr")]
pub async fn sign_in(_request: &SignInRequest) -> Result<TokenPair, ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(feature = "ssr")]
pub async fn refresh(_request: &RefreshRequest) -> Result<TokenPair, ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_formats() {
        let sign_up = SignUpRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "Secret!1".to_string(),
            confirm_password: "Secret!1".to_string(),
        };
        let json = serde_json::to_string(&sign_up).unwrap();
        assert!(json.contains("confirmPassword"));

        let refresh = RefreshRequest {
            refresh_token: "tok".to_string(),
            username: "alice".to_string(),
        };
        let json = serde_json::to_string(&refresh).unwrap();
        assert!(json.contains("refreshToken"));
        assert!(json.contains("username"));
    }

    #[test]
    fn test_server_error_display() {
        let err = ApiError::Server {
            status: 409,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Email already registered");
    }
}
