//! API utilities for frontend-backend communication
//!
//! Holds the API base configuration (resolved once at the app root and passed
//! down through context) and the generic list fetcher used by every
//! collection endpoint of the directory API.

use contracts::shared::collection::{parse_collection, Collection, FetchError, FetchOutcome};
use gloo_net::http::Request;
use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::system::auth::context::AuthContext;

/// Base URL of the directory REST API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Compile-time `DIRECTORY_API_BASE` wins; otherwise the page origin on port 3000
    pub fn resolve() -> Self {
        match option_env!("DIRECTORY_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base),
            _ => Self::new(api_base()),
        }
    }

    /// Build a full API URL from a path (should start with "/")
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Get the API base URL from the current window location
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// ApiConfig provided by `App`
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().expect("ApiConfig not provided at app root")
}

/// Fetch a list endpoint and extract the array stored under `field`
///
/// Never fails: every error (network, HTTP status, JSON, missing field) is
/// logged and returned as [`FetchOutcome::Failed`].
pub async fn fetch_collection<T>(
    config: &ApiConfig,
    auth: &AuthContext,
    path: &str,
    field: &str,
) -> FetchOutcome<T>
where
    T: DeserializeOwned,
{
    let url = config.url(path);
    let result = request_collection::<T>(&url, auth, field).await;

    match &result {
        Ok(collection) => {
            log::debug!("{}: loaded {} items", url, collection.items.len());
            if collection.skipped > 0 {
                log::warn!(
                    "{}: skipped {} malformed items in '{}'",
                    url,
                    collection.skipped,
                    field
                );
            }
        }
        Err(e) => log::warn!("{}: {}", url, e),
    }

    result.into()
}

async fn request_collection<T>(
    url: &str,
    auth: &AuthContext,
    field: &str,
) -> Result<Collection<T>, FetchError>
where
    T: DeserializeOwned,
{
    let mut request = Request::get(url).header("Accept", "application/json");
    if let Some(bearer) = auth.bearer() {
        request = request.header("Authorization", &bearer);
    }

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    parse_collection(&body, field)
}
