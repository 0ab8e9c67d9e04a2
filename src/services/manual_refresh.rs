//! User-triggered statistics refresh.
//!
//! Hits `/update`, which makes the backend recompute instead of serving its
//! cached numbers, and applies the result right away. Has no effect on the
//! poll timer.

use crate::services::backend::DashboardBackend;
use crate::services::display::{apply_stats_outcome, DisplaySink};
use std::sync::Arc;

/// Forces a backend recompute and displays the fresh statistics.
#[derive(Clone)]
pub struct ManualRefresh {
    backend: Arc<dyn DashboardBackend>,
    sink: Arc<dyn DisplaySink>,
}

impl ManualRefresh {
    pub fn new(backend: Arc<dyn DashboardBackend>, sink: Arc<dyn DisplaySink>) -> Self {
        Self { backend, sink }
    }

    /// Fetch and display. Same empty/failure handling as a regular poll.
    pub async fn run(&self) {
        log::info!("[refresh] Manual refresh triggered");
        let outcome = self.backend.force_update().await;
        apply_stats_outcome(self.sink.as_ref(), outcome, "refresh");
    }
}
