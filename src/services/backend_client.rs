//! Notifier backend HTTP client.
//!
//! Provides the reqwest implementation of [`DashboardBackend`].

use crate::error::AppError;
use crate::models::{NotificationReply, PreferenceSet, StatsSnapshot};
use crate::services::backend::DashboardBackend;
use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Content type sent with every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Preferences endpoint (GET loads, POST saves).
pub const CONFIG_ENDPOINT: &str = "/config";

/// Cached statistics endpoint.
pub const STATS_ENDPOINT: &str = "/stats";

/// Force-recompute statistics endpoint.
pub const UPDATE_ENDPOINT: &str = "/update";

/// Test notification endpoint.
pub const SEND_NOTIFICATION_ENDPOINT: &str = "/send-notification";

/// Backend client configuration.
#[derive(Debug, Clone)]
pub struct BackendClientConfig {
    /// Base URL of the notifier backend (e.g., `http://localhost:8080`).
    pub base_url: String,

    /// Request timeout in seconds. `None` leaves timing to the transport.
    pub timeout_secs: Option<u64>,
}

impl Default for BackendClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: None,
        }
    }
}

/// Notifier backend client.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    config: BackendClientConfig,
}

impl BackendClient {
    /// Create a new backend client.
    pub fn new(config: BackendClientConfig) -> Result<Self, AppError> {
        if config.base_url.trim().is_empty() {
            return Err(AppError::invalid_input_field(
                "Backend URL must not be empty",
                "base_url",
            ));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build the full URL for an endpoint path.
    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Turn a non-success status into an error, extracting the backend's message if any.
    async fn check_status(response: Response, endpoint: &str) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        let body_message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                // Errors come back as {"message": "..."} or {"error": "..."}
                v.get("message").or_else(|| v.get("error")).map(|m| match m.as_str() {
                    Some(s) => s.to_string(),
                    None => m.to_string(),
                })
            });

        let message = match body_message {
            Some(msg) => msg,
            None if body.trim().is_empty() => format!("Request failed ({})", status_code),
            None => format!("Request failed ({}): {}", status_code, body.trim()),
        };

        Err(AppError::backend_full(message, status_code, endpoint))
    }

    /// Decode a JSON body where `null` means "empty but valid".
    async fn decode_optional<T: DeserializeOwned>(
        response: Response,
        endpoint: &str,
    ) -> Result<Option<T>, AppError> {
        let response = Self::check_status(response, endpoint).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice::<Option<T>>(&bytes)
            .map_err(|e| AppError::invalid_response(format!("Failed to parse response: {}", e), endpoint))
    }

    /// Make a GET request to an endpoint whose payload may be `null`.
    async fn get_optional<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>, AppError> {
        let url = self.endpoint_url(endpoint);
        log::debug!("[backend] GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode_optional(response, endpoint).await
    }
}

#[async_trait]
impl DashboardBackend for BackendClient {
    async fn load_preferences(&self) -> Result<Option<PreferenceSet>, AppError> {
        self.get_optional(CONFIG_ENDPOINT).await
    }

    async fn save_preferences(&self, prefs: &PreferenceSet) -> Result<(), AppError> {
        let url = self.endpoint_url(CONFIG_ENDPOINT);
        let body = serde_json::to_vec(prefs)?;
        log::debug!("[backend] POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        // Response body is not part of the contract
        Self::check_status(response, CONFIG_ENDPOINT).await?;
        Ok(())
    }

    async fn fetch_stats(&self) -> Result<Option<StatsSnapshot>, AppError> {
        self.get_optional(STATS_ENDPOINT).await
    }

    async fn force_update(&self) -> Result<Option<StatsSnapshot>, AppError> {
        self.get_optional(UPDATE_ENDPOINT).await
    }

    async fn send_test_notification(&self) -> Result<NotificationReply, AppError> {
        let url = self.endpoint_url(SEND_NOTIFICATION_ENDPOINT);
        log::debug!("[backend] POST {}", url);
        let response = self.client.post(&url).send().await?;
        let response = Self::check_status(response, SEND_NOTIFICATION_ENDPOINT).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            AppError::invalid_response(
                format!("Failed to parse response: {}", e),
                SEND_NOTIFICATION_ENDPOINT,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_construction() {
        let client = BackendClient::new(BackendClientConfig {
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: Some(10),
        })
        .unwrap();

        assert_eq!(client.endpoint_url(STATS_ENDPOINT), "http://localhost:8080/stats");
        assert_eq!(
            client.endpoint_url(SEND_NOTIFICATION_ENDPOINT),
            "http://localhost:8080/send-notification"
        );
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let result = BackendClient::new(BackendClientConfig::default());
        assert!(matches!(result, Err(AppError::InvalidInput { .. })));
    }
}
