//! Background statistics poller.
//!
//! Fetches `/stats` on a fixed 30 second cadence for the lifetime of the
//! dashboard and pushes each result into the display sink. The cadence is
//! independent of the user's `PollingInterval`, which only drives the
//! backend's own scanning.
//!
//! Every tick spawns its own fetch, so a slow response never holds back the
//! next tick. Overlapping fetches are not ordered: whichever response
//! arrives last is what the sink shows.

use crate::services::backend::DashboardBackend;
use crate::services::display::{apply_stats_outcome, DisplaySink};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Client-side statistics refresh cadence.
pub const STATS_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Fetches statistics from the backend and renders them.
#[derive(Clone)]
pub struct StatsPoller {
    backend: Arc<dyn DashboardBackend>,
    sink: Arc<dyn DisplaySink>,
}

/// Handle to the running poll loop.
///
/// Dropping the handle does not stop the loop.
#[derive(Debug, Clone)]
pub struct PollerHandle {
    cancel_token: CancellationToken,
}

impl PollerHandle {
    /// Stop scheduling further ticks. Fetches already in flight still complete.
    pub fn stop(&self) {
        self.cancel_token.cancel();
    }

    /// Whether [`stop`](Self::stop) has been called.
    pub fn is_stopped(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

impl StatsPoller {
    /// Create a new poller.
    pub fn new(backend: Arc<dyn DashboardBackend>, sink: Arc<dyn DisplaySink>) -> Self {
        Self { backend, sink }
    }

    /// Run a single poll: fetch `/stats` and apply the result.
    pub async fn poll_once(&self) {
        let outcome = self.backend.fetch_stats().await;
        apply_stats_outcome(self.sink.as_ref(), outcome, "stats");
    }

    /// Start the recurring poll loop on the current tokio runtime.
    ///
    /// The first fetch happens one full interval after start.
    pub fn start(self) -> PollerHandle {
        let cancel_token = CancellationToken::new();
        let cancelled = cancel_token.clone();

        tokio::spawn(async move {
            let mut interval = time::interval_at(
                Instant::now() + STATS_REFRESH_INTERVAL,
                STATS_REFRESH_INTERVAL,
            );
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            log::info!(
                "[stats] Poller started, interval={}s",
                STATS_REFRESH_INTERVAL.as_secs()
            );

            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        let poller = self.clone();
                        tokio::spawn(async move { poller.poll_once().await });
                    }
                }
            }

            log::info!("[stats] Poller stopped");
        });

        PollerHandle { cancel_token }
    }
}
