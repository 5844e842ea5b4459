//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Every helper resolves transport and HTTP failures into [`ServiceError`].

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::config;
use super::error::ServiceError;

/// Get the base URL for API requests, including the version prefix
///
/// # Returns
/// - API base URL like "https://api.example.com/v2", without trailing slash
pub fn api_base() -> String {
    let api = &config().api;
    format!(
        "{}{}",
        api.base_url.trim_end_matches('/'),
        api.version_prefix.trim_end_matches('/')
    )
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/review");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON document
pub async fn get_json<T>(url: &str) -> Result<T, ServiceError>
where
    T: DeserializeOwned,
{
    let response = Request::get(url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| ServiceError::Network(e.to_string()))?;

    read_json(response).await
}

/// POST a JSON body and read a JSON document back
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ServiceError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ServiceError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ServiceError::Network(e.to_string()))?;

    read_json(response).await
}

/// GET a plain text document (static markdown assets, API warm-up)
pub async fn get_text(url: &str) -> Result<String, ServiceError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ServiceError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::from_status(status, &body));
    }

    response
        .text()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}

async fn read_json<T>(response: Response) -> Result<T, ServiceError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::from_status(status, &body));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))?;

    decode_body(&text)
}

/// Decodes a 2xx body; an empty body counts as a failure.
pub fn decode_body<T>(text: &str) -> Result<T, ServiceError>
where
    T: DeserializeOwned,
{
    if text.trim().is_empty() {
        return Err(ServiceError::EmptyResponse);
    }
    serde_json::from_str(text).map_err(|e| ServiceError::Decode(e.to_string()))
}
