//! API utilities for frontend-backend communication
//!
//! URL construction against the configured backend origin plus thin JSON
//! wrappers over `gloo_net` that every resource `api.rs` goes through.

use crate::shared::config::AppConfig;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

/// Base URL of the backend, without trailing slash.
pub fn api_base() -> String {
    AppConfig::load().api_base_url
}

/// Build a full API URL from a path starting with `/api/`.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/productos/");
/// ```
pub fn api_url(path: &str) -> String {
    AppConfig::load().url(path)
}

/// URL of a single resource: `{base}/api/{collection}/{id}/`.
///
/// The id is percent-encoded.
pub fn api_item_url(collection: &str, id: &str) -> String {
    api_url(&item_path(collection, id))
}

fn item_path(collection: &str, id: &str) -> String {
    format!("/api/{}/{}/", collection, urlencoding::encode(id))
}

fn check(response: Response, url: &str) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        log::warn!("{} -> HTTP {}", url, response.status());
        Err(ApiError::Status(response.status()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        log::error!("{}: cannot decode body: {}", url, e);
        ApiError::Decode(e.to_string())
    })
}

/// GET `url` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check(response, url)?;
    decode(response, url).await
}

async fn send_json<B, T>(builder: RequestBuilder, url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = builder
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check(response, url)?;
    decode(response, url).await
}

/// POST a JSON body; the server answers with the created object.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("POST {}", url);
    send_json(Request::post(url), url, body).await
}

/// PUT a JSON body; the server answers with the stored object.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("PUT {}", url);
    send_json(Request::put(url), url, body).await
}

/// PATCH a JSON body; the server answers with the stored object.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("PATCH {}", url);
    send_json(Request::patch(url), url, body).await
}

/// DELETE `url`. Any 2xx counts as success; the body is ignored.
pub async fn delete(url: &str) -> Result<(), ApiError> {
    log::debug!("DELETE {}", url);
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response, url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path_encodes_id() {
        assert_eq!(item_path("productos", "12"), "/api/productos/12/");
        assert_eq!(item_path("ventas", "a b/c"), "/api/ventas/a%20b%2Fc/");
    }

    #[test]
    fn test_item_url_joins_configured_origin() {
        let config = AppConfig {
            api_base_url: "https://api.tienda.ec".to_string(),
        };
        assert_eq!(
            config.url(&item_path("proveedores", "7")),
            "https://api.tienda.ec/api/proveedores/7/"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP error: 404");
        assert_eq!(
            ApiError::Network("offline".to_string()).to_string(),
            "network error: offline"
        );
    }
}
