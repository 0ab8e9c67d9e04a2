//! Backend contract consumed by the dashboard services.

use crate::error::AppError;
use crate::models::{NotificationReply, PreferenceSet, StatsSnapshot};
use async_trait::async_trait;

/// Endpoints of the notifier backend, one method per request.
///
/// Load-type methods return `Ok(None)` when the backend answers with a
/// valid but empty (`null`) payload; that case is distinct from `Err`.
#[async_trait]
pub trait DashboardBackend: Send + Sync {
    /// `GET /config`.
    async fn load_preferences(&self) -> Result<Option<PreferenceSet>, AppError>;

    /// `POST /config` with the full preference document.
    async fn save_preferences(&self, prefs: &PreferenceSet) -> Result<(), AppError>;

    /// `GET /stats`.
    async fn fetch_stats(&self) -> Result<Option<StatsSnapshot>, AppError>;

    /// `GET /update`: asks the backend to recompute before answering.
    async fn force_update(&self) -> Result<Option<StatsSnapshot>, AppError>;

    /// `POST /send-notification`.
    async fn send_test_notification(&self) -> Result<NotificationReply, AppError>;
}
