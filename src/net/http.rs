//! Request dispatch for the extraction service.
//!
//! Every outbound call funnels through [`dispatch`]: the bearer credential
//! is attached by [`authorize`], failures are classified into
//! [`ApiError`], and a 401 from any endpoint clears the session before the
//! error reaches the caller. No retries; callers decide what is worth
//! repeating.

#[cfg(feature = "hydrate")]
use crate::auth::session::Session;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;

/// Proxy prefix the dashboard is served behind; the deployment maps it to
/// the extraction service.
pub const API_BASE: &str = "/api";

/// Absolute request path for a service endpoint.
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Attach the current credential, if one is held.
#[cfg(feature = "hydrate")]
pub(crate) fn authorize(
    session: Session,
    builder: gloo_net::http::RequestBuilder,
) -> gloo_net::http::RequestBuilder {
    match session.credential() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Send a request and classify the response.
///
/// # Errors
///
/// `Network` when no HTTP response was produced; otherwise the
/// classification of the non-success status. An unauthorized response
/// clears the session as a side effect, whatever endpoint produced it.
#[cfg(feature = "hydrate")]
pub(crate) async fn dispatch(
    session: Session,
    request: gloo_net::http::Request,
) -> Result<gloo_net::http::Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.ok();
    let error = ApiError::from_status(status, body.as_deref());
    if error.is_unauthorized() {
        leptos::logging::warn!("request to {} unauthorized, clearing session", response.url());
        session.clear_unauthorized();
    }
    Err(error)
}

/// Decode a JSON response body.
#[cfg(feature = "hydrate")]
pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|_| ApiError::Decode)
}

/// GET a JSON endpoint with the credential attached.
#[cfg(feature = "hydrate")]
pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
    session: Session,
    path: &str,
) -> Result<T, ApiError> {
    let request = authorize(session, gloo_net::http::Request::get(&api_url(path)))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = dispatch(session, request).await?;
    decode(response).await
}

/// Percent-encode key/value pairs for form bodies and query strings.
#[cfg(feature = "hydrate")]
pub(crate) fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", String::from(js_sys::encode_uri_component(value))))
        .collect::<Vec<_>>()
        .join("&")
}
