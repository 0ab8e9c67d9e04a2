//! Data models exchanged with the notifier backend.
//!
//! All models derive Serialize and Deserialize and use the backend's
//! JSON field names.

pub mod notification_reply;
pub mod preference_set;
pub mod stats_snapshot;

// Re-exports for convenient access
pub use notification_reply::NotificationReply;
pub use preference_set::PreferenceSet;
pub use stats_snapshot::StatsSnapshot;
