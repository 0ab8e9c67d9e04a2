//! In-memory rendered dashboard state.

use crate::services::display::{DisplaySink, StatsDisplay};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Rendered {
    stats: Option<StatsDisplay>,
    alerts: Vec<String>,
}

/// Display sink that keeps what is currently on screen.
///
/// Stats are replaced wholesale by each update; alerts accumulate in order.
#[derive(Debug, Default)]
pub struct DashboardView {
    rendered: Mutex<Rendered>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Rendered> {
        self.rendered.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Currently displayed statistics, if any update has arrived yet.
    pub fn stats(&self) -> Option<StatsDisplay> {
        self.lock().stats.clone()
    }

    /// All alerts shown so far.
    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    /// Drain the alerts shown so far.
    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut self.lock().alerts)
    }
}

impl DisplaySink for DashboardView {
    fn show_stats(&self, stats: StatsDisplay) {
        self.lock().stats = Some(stats);
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }
}
