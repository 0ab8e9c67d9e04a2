//! Dashboard configuration.
//!
//! Resolved from defaults, then an optional JSON settings file, then
//! environment overrides.

use crate::error::AppError;
use crate::services::BackendClientConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a JSON settings file.
pub const CONFIG_PATH_ENV: &str = "PR_DASHBOARD_CONFIG";

/// Environment override for the backend URL.
pub const BACKEND_URL_ENV: &str = "PR_DASHBOARD_BACKEND_URL";

/// Environment override for the request timeout.
pub const TIMEOUT_ENV: &str = "PR_DASHBOARD_TIMEOUT_SECS";

/// Default backend location.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the notifier backend.
    pub backend_url: String,

    /// Request timeout in seconds; unset means the transport default.
    pub request_timeout_secs: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, AppError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to read environment variables.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => Self::from_file(Path::new(path.trim()))?,
            _ => Self::default(),
        };

        if let Some(url) = lookup(BACKEND_URL_ENV) {
            config.backend_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!("{} must be a number of seconds, got '{}'", TIMEOUT_ENV, raw))
            })?;
            config.request_timeout_secs = Some(secs);
        }

        if config.backend_url.is_empty() {
            return Err(AppError::config("Backend URL must not be empty"));
        }

        Ok(config)
    }

    /// Read a JSON settings file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents)
            .map_err(|e| AppError::config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Backend client settings derived from this configuration.
    pub fn client_config(&self) -> BackendClientConfig {
        BackendClientConfig {
            base_url: self.backend_url.clone(),
            timeout_secs: self.request_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::load_with(env(&[])).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.client_config().base_url, DEFAULT_BACKEND_URL);
        assert!(config.client_config().timeout_secs.is_none());
    }

    #[test]
    fn test_file_then_env_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"backend_url":"http://notifier.lan:9000","request_timeout_secs":5}}"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = DashboardConfig::load_with(env(&[(CONFIG_PATH_ENV, path.as_str())])).unwrap();
        assert_eq!(config.backend_url, "http://notifier.lan:9000");
        assert_eq!(config.request_timeout_secs, Some(5));

        let config = DashboardConfig::load_with(env(&[
            (CONFIG_PATH_ENV, path.as_str()),
            (BACKEND_URL_ENV, "http://127.0.0.1:7000"),
        ]))
        .unwrap();
        assert_eq!(config.backend_url, "http://127.0.0.1:7000");
        assert_eq!(config.request_timeout_secs, Some(5));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"request_timeout_secs":12}}"#).unwrap();

        let config = DashboardConfig::from_file(file.path()).unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.request_timeout_secs, Some(12));
    }

    #[test]
    fn test_bad_values_rejected() {
        let result = DashboardConfig::load_with(env(&[(TIMEOUT_ENV, "soon")]));
        assert!(matches!(result, Err(AppError::Config { .. })));

        let result = DashboardConfig::load_with(env(&[(BACKEND_URL_ENV, "  ")]));
        assert!(matches!(result, Err(AppError::Config { .. })));

        let result = DashboardConfig::load_with(env(&[(CONFIG_PATH_ENV, "/nonexistent/dashboard.json")]));
        assert!(matches!(result, Err(AppError::Config { .. })));
    }
}
