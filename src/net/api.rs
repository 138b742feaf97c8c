//! Typed endpoint calls for the extraction service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, one function per
//! endpoint. Server-side (SSR): stubs returning `ApiError::Network` since
//! these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Everything returns `Result<_, ApiError>` so pages can distinguish a
//! credential rejection (session already cleared by the adapter) from
//! validation, network, and server failures.

#![allow(clippy::unused_async)]

use uuid::Uuid;

use crate::auth::session::Session;
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::types::BatchResult;
use crate::net::types::{
    DashboardStats, Extraction, HistoryPage, NewUser, Token, User, UserUpdate,
};

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on the server".to_owned()))
}

/// Exchange form-encoded credentials for a bearer token via
/// `POST /auth/login`.
///
/// # Errors
///
/// `Unauthorized` on wrong credentials; the usual taxonomy otherwise.
pub async fn login(session: Session, email: &str, password: &str) -> Result<Token, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::http::form_encode(&[("username", email), ("password", password)]);
        let request = super::http::authorize(
            session,
            gloo_net::http::Request::post(&super::http::api_url("/auth/login")),
        )
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = super::http::dispatch(session, request).await?;
        super::http::decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, email, password);
        server_stub()
    }
}

/// Fetch the identity behind the current credential via `GET /auth/me`.
pub async fn fetch_current_user(session: Session) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_json(session, "/auth/me").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        server_stub()
    }
}

/// Fetch one page of extraction history.
pub async fn fetch_history(session: Session, skip: u64, limit: u64) -> Result<HistoryPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_json(session, &format!("/history?skip={skip}&limit={limit}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, skip, limit);
        server_stub()
    }
}

/// Fetch a single extraction by request id.
pub async fn fetch_extraction(session: Session, id: Uuid) -> Result<Extraction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_json(session, &format!("/extract/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        server_stub()
    }
}

/// Fetch aggregated dashboard statistics.
pub async fn fetch_dashboard_stats(session: Session) -> Result<DashboardStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_json(session, "/stats/dashboard").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        server_stub()
    }
}

/// List user accounts (admin only).
pub async fn fetch_users(session: Session) -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_json(session, "/users").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        server_stub()
    }
}

/// Create a user account (admin only).
pub async fn create_user(session: Session, new_user: &NewUser) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::http::authorize(
            session,
            gloo_net::http::Request::post(&super::http::api_url("/users")),
        )
        .json(new_user)
        .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = super::http::dispatch(session, request).await?;
        super::http::decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, new_user);
        server_stub()
    }
}

/// Update a user account (admin only). The service takes the changed
/// fields as query parameters.
pub async fn update_user(session: Session, id: i64, update: &UserUpdate) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let active = if update.is_active { "true" } else { "false" };
        let query = super::http::form_encode(&[
            ("email", update.email.as_str()),
            ("full_name", update.full_name.as_str()),
            ("role", update.role.as_str()),
            ("is_active", active),
        ]);
        let request = super::http::authorize(
            session,
            gloo_net::http::Request::put(&super::http::api_url(&format!("/users/{id}?{query}"))),
        )
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = super::http::dispatch(session, request).await?;
        super::http::decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id, update);
        server_stub()
    }
}

/// Delete a user account (admin only).
pub async fn delete_user(session: Session, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::http::authorize(
            session,
            gloo_net::http::Request::delete(&super::http::api_url(&format!("/users/{id}"))),
        )
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
        super::http::dispatch(session, request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        server_stub()
    }
}

/// Submit one document for extraction via multipart `POST /extract`.
#[cfg(feature = "hydrate")]
pub async fn extract_single(session: Session, file: &web_sys::File) -> Result<Extraction, ApiError> {
    let form = multipart_form(&[("file", file)])?;
    let request = super::http::authorize(
        session,
        gloo_net::http::Request::post(&super::http::api_url("/extract")),
    )
    .body(form)
    .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = super::http::dispatch(session, request).await?;
    super::http::decode(response).await
}

/// Submit several documents for extraction via multipart
/// `POST /extract/batch`.
#[cfg(feature = "hydrate")]
pub async fn extract_batch(
    session: Session,
    files: &[web_sys::File],
) -> Result<BatchResult, ApiError> {
    let parts: Vec<(&str, &web_sys::File)> = files.iter().map(|f| ("files", f)).collect();
    let form = multipart_form(&parts)?;
    let request = super::http::authorize(
        session,
        gloo_net::http::Request::post(&super::http::api_url("/extract/batch")),
    )
    .body(form)
    .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = super::http::dispatch(session, request).await?;
    super::http::decode(response).await
}

/// Assemble a multipart form; the browser supplies the boundary header.
#[cfg(feature = "hydrate")]
fn multipart_form(parts: &[(&str, &web_sys::File)]) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".to_owned()))?;
    for (name, file) in parts {
        form.append_with_blob_and_filename(name, file, &file.name())
            .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
    }
    Ok(form)
}
