//! Preference controls as the user sees and edits them.

use crate::error::AppError;
use crate::models::PreferenceSet;
use serde::Serialize;
use std::str::FromStr;

/// Raw values of the seven preference controls.
///
/// The monitoring frequency is kept as typed text; it is only parsed when
/// the user saves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreferenceControls {
    pub monitoring_frequency: String,
    pub notify_comments: bool,
    pub notify_tasks: bool,
    pub notify_status: bool,
    pub notify_completion: bool,
    pub notify_filter_you: bool,
    pub notify_unreviewed: bool,
}

/// Identifies a single control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Frequency,
    Comments,
    Tasks,
    Status,
    Completion,
    FilterYou,
    Unreviewed,
}

impl Control {
    pub const ALL: [Control; 7] = [
        Control::Frequency,
        Control::Comments,
        Control::Tasks,
        Control::Status,
        Control::Completion,
        Control::FilterYou,
        Control::Unreviewed,
    ];

    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Control::Frequency => "frequency",
            Control::Comments => "comments",
            Control::Tasks => "tasks",
            Control::Status => "status",
            Control::Completion => "completion",
            Control::FilterYou => "filter-you",
            Control::Unreviewed => "unreviewed",
        }
    }
}

impl FromStr for Control {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Control::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| AppError::invalid_input_field(format!("Unknown control '{}'", s), "control"))
    }
}

fn parse_checkbox(value: &str, control: Control) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(AppError::invalid_input_field(
            format!("Expected on/off, got '{}'", other),
            control.name(),
        )),
    }
}

impl PreferenceControls {
    /// Set every control from a loaded preference set.
    pub fn apply(&mut self, prefs: &PreferenceSet) {
        self.monitoring_frequency = prefs.polling_interval.to_string();
        self.notify_comments = prefs.comments;
        self.notify_tasks = prefs.tasks;
        self.notify_status = prefs.status_changes;
        self.notify_completion = prefs.completion_time;
        self.notify_filter_you = prefs.filter_own_activities;
        self.notify_unreviewed = prefs.sticky_unreviewed_prs;
    }

    /// Build the full preference set from the current control values.
    pub fn to_preference_set(&self) -> Result<PreferenceSet, AppError> {
        let polling_interval = self.monitoring_frequency.trim().parse::<u64>().map_err(|_| {
            AppError::invalid_input_field(
                format!(
                    "Monitoring frequency must be a whole number of seconds, got '{}'",
                    self.monitoring_frequency
                ),
                Control::Frequency.name(),
            )
        })?;

        Ok(PreferenceSet {
            polling_interval,
            comments: self.notify_comments,
            tasks: self.notify_tasks,
            status_changes: self.notify_status,
            completion_time: self.notify_completion,
            filter_own_activities: self.notify_filter_you,
            sticky_unreviewed_prs: self.notify_unreviewed,
        })
    }

    /// Update one control from user input.
    ///
    /// Frequency text is stored as typed; checkboxes must parse.
    pub fn set(&mut self, control: Control, value: &str) -> Result<(), AppError> {
        let checkbox = match control {
            Control::Frequency => {
                self.monitoring_frequency = value.trim().to_string();
                return Ok(());
            }
            Control::Comments => &mut self.notify_comments,
            Control::Tasks => &mut self.notify_tasks,
            Control::Status => &mut self.notify_status,
            Control::Completion => &mut self.notify_completion,
            Control::FilterYou => &mut self.notify_filter_you,
            Control::Unreviewed => &mut self.notify_unreviewed,
        };
        *checkbox = parse_checkbox(value, control)?;
        Ok(())
    }
}
