use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::env;

use crate::api::ErrorResponse;
use crate::cli::error::{CliError, CliResult};

/// Default server URL when neither `--api-url` nor `CATALOG_API_URL` is set
pub const DEFAULT_API_URL: &str = "http://localhost:9050";

/// API client for communicating with the catalog REST API
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. CATALOG_API_URL environment variable
    /// 3. Default: http://localhost:9050
    pub fn new(api_url: Option<String>) -> Self {
        let base_url = api_url
            .or_else(|| env::var("CATALOG_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a GET request builder
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.get(&url)
    }

    /// Build an endpoint URL from raw path segments.
    ///
    /// Each segment is percent-encoded, so names containing `/`, `?` or `#`
    /// stay a single path segment.
    pub fn endpoint(&self, segments: &[&str]) -> CliResult<Url> {
        let invalid = |message: String| CliError::InvalidUrl {
            url: self.base_url.clone(),
            message,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot have path segments".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Create a PUT request builder for the given path segments
    pub fn put(&self, segments: &[&str]) -> CliResult<reqwest::RequestBuilder> {
        Ok(self.client.put(self.endpoint(segments)?))
    }

    /// Handle API response with standardized error handling
    ///
    /// Returns the deserialized response body on success,
    /// or a CliError::ApiError on non-success status codes. The server's
    /// `{"error": ...}` message is unwrapped when present.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> CliResult<T> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| CliError::InvalidResponse {
                    message: e.to_string(),
                })
        } else {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ErrorResponse>(&error_text)
                .map(|e| e.error)
                .unwrap_or(error_text);
            Err(CliError::ApiError { status, message })
        }
    }
}
