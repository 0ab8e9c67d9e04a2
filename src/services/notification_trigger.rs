//! Test notification trigger.

use crate::services::backend::DashboardBackend;
use crate::services::display::DisplaySink;
use std::sync::Arc;

/// Asks the backend to emit a one-shot test notification.
#[derive(Clone)]
pub struct NotificationTrigger {
    backend: Arc<dyn DashboardBackend>,
    sink: Arc<dyn DisplaySink>,
}

impl NotificationTrigger {
    pub fn new(backend: Arc<dyn DashboardBackend>, sink: Arc<dyn DisplaySink>) -> Self {
        Self { backend, sink }
    }

    /// Send the request. The backend's message is alerted verbatim on
    /// success; failures only reach the log.
    pub async fn trigger(&self) {
        match self.backend.send_test_notification().await {
            Ok(reply) => {
                log::info!("[notify] Test notification sent: {}", reply.message);
                self.sink.alert(&reply.message);
            }
            Err(e) => log::error!("[notify] Failed to send test notification: {}", e),
        }
    }
}
