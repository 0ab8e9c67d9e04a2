//! Activity statistics model.

use serde::{Deserialize, Serialize};

/// Point-in-time summary of active pull request activity, as served by
/// `/stats` and `/update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatsSnapshot {
    /// Unix timestamp (seconds) of the backend's last data refresh.
    pub last_update: i64,

    /// Count of unresolved comment activity.
    pub number_of_active_pr_comments: u64,

    /// Count of unresolved task activity.
    pub number_of_active_pr_tasks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_payload() {
        let snapshot: StatsSnapshot = serde_json::from_str(
            r#"{"LastUpdate":1700000000,"NumberOfActivePrComments":3,"NumberOfActivePrTasks":1}"#,
        )
        .unwrap();
        assert_eq!(snapshot.last_update, 1_700_000_000);
        assert_eq!(snapshot.number_of_active_pr_comments, 3);
        assert_eq!(snapshot.number_of_active_pr_tasks, 1);
    }

    #[test]
    fn test_negative_counts_rejected() {
        let result = serde_json::from_str::<StatsSnapshot>(
            r#"{"LastUpdate":1700000000,"NumberOfActivePrComments":-1,"NumberOfActivePrTasks":1}"#,
        );
        assert!(result.is_err());
    }
}
