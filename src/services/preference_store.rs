//! Preference store client.
//!
//! Loads and saves the whole [`PreferenceSet`] against the backend. The
//! backend is the source of truth; nothing is cached here.

use crate::models::PreferenceSet;
use crate::services::backend::DashboardBackend;
use crate::services::display::{DisplaySink, EMPTY_RESPONSE_ALERT};
use std::sync::Arc;

/// Loads and saves notification preferences.
#[derive(Clone)]
pub struct PreferenceStore {
    backend: Arc<dyn DashboardBackend>,
    sink: Arc<dyn DisplaySink>,
}

impl PreferenceStore {
    /// Create a new preference store client.
    pub fn new(backend: Arc<dyn DashboardBackend>, sink: Arc<dyn DisplaySink>) -> Self {
        Self { backend, sink }
    }

    /// Fetch the current preference set.
    ///
    /// Returns `None` when the backend answered with an empty payload (the
    /// user is alerted) or when the request failed (logged only). Callers
    /// leave their controls unchanged in both cases.
    pub async fn load(&self) -> Option<PreferenceSet> {
        match self.backend.load_preferences().await {
            Ok(Some(prefs)) => {
                log::info!(
                    "[preferences] Loaded preferences (polling interval {}s)",
                    prefs.polling_interval
                );
                Some(prefs)
            }
            Ok(None) => {
                log::warn!("[preferences] Preferences response was empty");
                self.sink.alert(EMPTY_RESPONSE_ALERT);
                None
            }
            Err(e) => {
                log::error!("[preferences] Failed to load preferences: {}", e);
                None
            }
        }
    }

    /// Submit the full preference set.
    ///
    /// Failures are logged and never surfaced to the user.
    pub async fn save(&self, prefs: &PreferenceSet) {
        match self.backend.save_preferences(prefs).await {
            Ok(()) => log::info!("[preferences] Saved preferences"),
            Err(e) => log::error!("[preferences] Failed to save preferences: {}", e),
        }
    }
}
