//! Terminal front end: line commands in, dashboard text out.

use crate::commands::controls::{Control, PreferenceControls};
use crate::commands::view::DashboardView;
use crate::error::AppError;
use crate::services::display::{DisplaySink, StatsDisplay};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Save button.
    Save,
    /// Manual refresh button.
    Refresh,
    /// Test notification button.
    Test,
    /// Redraw controls and statistics.
    Show,
    /// Edit a control.
    Set { control: Control, value: String },
    Help,
    Quit,
}

impl UiEvent {
    /// Parse a command line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, AppError> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(None);
        };

        let event = match command.to_ascii_lowercase().as_str() {
            "save" => UiEvent::Save,
            "refresh" | "update" => UiEvent::Refresh,
            "test" => UiEvent::Test,
            "show" => UiEvent::Show,
            "help" | "?" => UiEvent::Help,
            "quit" | "exit" => UiEvent::Quit,
            "set" => {
                let control = parts
                    .next()
                    .ok_or_else(|| AppError::invalid_input("Usage: set <control> <value>"))?
                    .parse::<Control>()?;
                let value = parts.collect::<Vec<_>>().join(" ");
                if value.is_empty() {
                    return Err(AppError::invalid_input_field(
                        "Missing value",
                        control.name(),
                    ));
                }
                UiEvent::Set { control, value }
            }
            other => {
                return Err(AppError::invalid_input(format!(
                    "Unknown command '{}' (try 'help')",
                    other
                )))
            }
        };

        Ok(Some(event))
    }
}

/// Display sink that prints to stdout and remembers what it printed.
#[derive(Debug, Default)]
pub struct TerminalView {
    view: DashboardView,
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_controls(&self, controls: &PreferenceControls) {
        println!("Preferences");
        println!("  Monitoring frequency (s): {}", controls.monitoring_frequency);
        println!("  {} Comments", checkbox(controls.notify_comments));
        println!("  {} Tasks", checkbox(controls.notify_tasks));
        println!("  {} Status changes", checkbox(controls.notify_status));
        println!("  {} Completion time", checkbox(controls.notify_completion));
        println!("  {} Filter own activities", checkbox(controls.notify_filter_you));
        println!("  {} Sticky unreviewed PRs", checkbox(controls.notify_unreviewed));
    }

    /// Reprint the last statistics received, or a placeholder.
    pub fn render_stats(&self) {
        match self.view.stats() {
            Some(stats) => print_stats(&stats),
            None => println!("Statistics: waiting for first update"),
        }
    }

    pub fn print_error(&self, err: &AppError) {
        println!("! {}", err);
    }

    pub fn print_help(&self) {
        let names: Vec<&str> = Control::ALL.iter().map(|c| c.name()).collect();
        println!("Commands: save | refresh | test | show | set <control> <value> | help | quit");
        println!("Controls: {}", names.join(", "));
    }
}

fn print_stats(stats: &StatsDisplay) {
    println!("Statistics");
    println!("  Last update:         {}", stats.last_update);
    println!("  Active PR comments:  {}", stats.active_comments);
    println!("  Active PR tasks:     {}", stats.active_tasks);
}

impl DisplaySink for TerminalView {
    fn show_stats(&self, stats: StatsDisplay) {
        print_stats(&stats);
        self.view.show_stats(stats);
    }

    fn alert(&self, message: &str) {
        println!("*** {} ***", message);
        self.view.alert(message);
    }
}
