//! Test notification response model.

use serde::{Deserialize, Serialize};

/// Body returned by `POST /send-notification`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationReply {
    /// Human-readable outcome, shown to the user verbatim.
    pub message: String,
}
