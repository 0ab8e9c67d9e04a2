//! Display sink seam between the dashboard services and whatever renders them.
//!
//! Services push rendered statistics and user alerts into a [`DisplaySink`];
//! the sink decides how to present them (terminal, in-memory view, ...).

use crate::error::AppError;
use crate::models::StatsSnapshot;
use chrono::{Local, LocalResult, TimeZone};
use serde::Serialize;

/// Alert shown whenever a load-type request returns an empty payload.
pub const EMPTY_RESPONSE_ALERT: &str = "Response was empty, but without error";

/// Format used to render `LastUpdate` timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Statistics as rendered on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsDisplay {
    /// Last backend refresh, as local date and time.
    pub last_update: String,

    /// Active comment count.
    pub active_comments: String,

    /// Active task count.
    pub active_tasks: String,
}

impl StatsDisplay {
    /// Render a snapshot using the local time zone.
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        Self::from_snapshot_in(snapshot, &Local)
    }

    /// Render a snapshot in the given time zone.
    pub fn from_snapshot_in<Tz>(snapshot: &StatsSnapshot, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            last_update: render_timestamp(snapshot.last_update, tz),
            active_comments: snapshot.number_of_active_pr_comments.to_string(),
            active_tasks: snapshot.number_of_active_pr_tasks.to_string(),
        }
    }
}

/// Render Unix seconds as a date/time string in `tz`.
///
/// Out-of-range timestamps fall back to the raw number.
pub fn render_timestamp<Tz>(secs: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_opt(secs, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.format(TIMESTAMP_FORMAT).to_string()
        }
        LocalResult::None => secs.to_string(),
    }
}

/// Receiver for everything the dashboard shows to the user.
pub trait DisplaySink: Send + Sync {
    /// Replace the displayed statistics.
    fn show_stats(&self, stats: StatsDisplay);

    /// Show a blocking alert.
    fn alert(&self, message: &str);
}

/// Apply the outcome of a statistics request to the sink.
///
/// Success replaces the displayed values, an empty payload alerts, and a
/// failure is only logged so the previous values stay on screen.
pub(crate) fn apply_stats_outcome(
    sink: &dyn DisplaySink,
    outcome: Result<Option<StatsSnapshot>, AppError>,
    component: &str,
) {
    match outcome {
        Ok(Some(snapshot)) => {
            log::debug!(
                "[{}] Stats received: last_update={}, comments={}, tasks={}",
                component,
                snapshot.last_update,
                snapshot.number_of_active_pr_comments,
                snapshot.number_of_active_pr_tasks
            );
            sink.show_stats(StatsDisplay::from_snapshot(&snapshot));
        }
        Ok(None) => {
            log::warn!("[{}] Stats response was empty", component);
            sink.alert(EMPTY_RESPONSE_ALERT);
        }
        Err(e) => {
            log::error!("[{}] Failed to fetch stats: {}", component, e);
        }
    }
}
