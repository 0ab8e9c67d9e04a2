//! UI event handlers.
//!
//! This module binds user-facing events to the dashboard services:
//! - page load: fetch preferences and fill the controls
//! - save button: submit the controls as a full preference set
//! - refresh button: force a statistics recompute
//! - test button: request a test notification
//!
//! The handlers hold no state beyond the current control values.

pub mod controls;
pub mod terminal;
pub mod view;

pub use controls::{Control, PreferenceControls};
pub use terminal::{TerminalView, UiEvent};
pub use view::DashboardView;

use crate::error::AppError;
use crate::services::{
    DashboardBackend, DisplaySink, ManualRefresh, NotificationTrigger, PollerHandle,
    PreferenceStore, StatsPoller,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The dashboard: controls plus the services their events drive.
pub struct Dashboard {
    preferences: PreferenceStore,
    poller: StatsPoller,
    refresh: ManualRefresh,
    notifications: NotificationTrigger,
    controls: RwLock<PreferenceControls>,
}

impl Dashboard {
    /// Create a dashboard talking to `backend` and rendering into `sink`.
    pub fn new(backend: Arc<dyn DashboardBackend>, sink: Arc<dyn DisplaySink>) -> Self {
        Self {
            preferences: PreferenceStore::new(backend.clone(), sink.clone()),
            poller: StatsPoller::new(backend.clone(), sink.clone()),
            refresh: ManualRefresh::new(backend.clone(), sink.clone()),
            notifications: NotificationTrigger::new(backend, sink),
            controls: RwLock::new(PreferenceControls::default()),
        }
    }

    /// Page load: fill the controls from the backend's preferences.
    ///
    /// Controls are left untouched if nothing was loaded. Statistics are not
    /// fetched here; they arrive with the first poll tick or manual refresh.
    pub async fn initialize(&self) {
        if let Some(prefs) = self.preferences.load().await {
            self.controls.write().await.apply(&prefs);
            log::debug!("[dashboard] Controls updated from backend preferences");
        }
    }

    /// Start the recurring statistics poll.
    pub fn start_polling(&self) -> PollerHandle {
        self.poller.clone().start()
    }

    /// Snapshot of the current control values.
    pub async fn controls(&self) -> PreferenceControls {
        self.controls.read().await.clone()
    }

    /// User edit of a single control.
    pub async fn set_control(&self, control: Control, value: &str) -> Result<(), AppError> {
        self.controls.write().await.set(control, value)
    }

    /// Save button.
    pub async fn on_save_clicked(&self) {
        let prefs = match self.controls.read().await.to_preference_set() {
            Ok(prefs) => prefs,
            Err(e) => {
                log::error!("[dashboard] Not saving preferences: {}", e);
                return;
            }
        };
        self.preferences.save(&prefs).await;
    }

    /// Manual refresh button.
    pub async fn on_refresh_clicked(&self) {
        self.refresh.run().await;
    }

    /// Test notification button.
    pub async fn on_test_clicked(&self) {
        self.notifications.trigger().await;
    }
}
