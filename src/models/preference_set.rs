//! Notification preference model.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Notification and polling preferences persisted by the backend.
///
/// Always loaded and saved as a whole document; field names match the
/// backend's `/config` payload exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PreferenceSet {
    /// Backend scanning cadence in seconds.
    ///
    /// Accepted as a number or a numeric string, always written as a number.
    #[serde(deserialize_with = "deserialize_interval")]
    pub polling_interval: u64,

    /// Notify on new comments.
    pub comments: bool,

    /// Notify on new tasks.
    pub tasks: bool,

    /// Notify on pull request status changes.
    pub status_changes: bool,

    /// Include the estimated completion time in notifications.
    pub completion_time: bool,

    /// Ignore activity authored by the configured user.
    pub filter_own_activities: bool,

    /// Keep unreviewed pull requests pinned.
    #[serde(rename = "StickyUnreviewedPRs")]
    pub sticky_unreviewed_prs: bool,
}

/// `PollingInterval` as it may appear on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInterval {
    Number(u64),
    Text(String),
}

fn deserialize_interval<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawInterval::deserialize(deserializer)? {
        RawInterval::Number(secs) => Ok(secs),
        RawInterval::Text(text) => text.trim().parse().map_err(|_| {
            de::Error::custom(format!(
                "PollingInterval must be a non-negative whole number, got '{}'",
                text
            ))
        }),
    }
}
