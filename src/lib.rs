//! PR Activity Dashboard - client for a pull-request activity notifier.
//!
//! Keeps a dashboard in sync with the notifier backend: loads and saves
//! notification preferences, polls activity statistics, forces refreshes
//! and triggers test notifications.

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

use commands::{Dashboard, TerminalView, UiEvent};
use config::DashboardConfig;
use error::AppError;
use services::BackendClient;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Run the terminal dashboard until stdin closes or the user quits.
///
/// Button-style commands are spawned so a slow backend never blocks input;
/// they may complete in any order.
pub async fn run(config: DashboardConfig) -> Result<(), AppError> {
    let client = BackendClient::new(config.client_config())?;
    log::info!("[dashboard] Using backend at {}", client.base_url());

    let terminal = Arc::new(TerminalView::new());
    let dashboard = Arc::new(Dashboard::new(Arc::new(client), terminal.clone()));

    dashboard.initialize().await;
    terminal.render_controls(&dashboard.controls().await);

    // Runs for the lifetime of the session
    let _poller = dashboard.start_polling();
    terminal.print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = match UiEvent::parse(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                terminal.print_error(&e);
                continue;
            }
        };

        match event {
            UiEvent::Save => {
                let dashboard = dashboard.clone();
                tokio::spawn(async move { dashboard.on_save_clicked().await });
            }
            UiEvent::Refresh => {
                let dashboard = dashboard.clone();
                tokio::spawn(async move { dashboard.on_refresh_clicked().await });
            }
            UiEvent::Test => {
                let dashboard = dashboard.clone();
                tokio::spawn(async move { dashboard.on_test_clicked().await });
            }
            UiEvent::Show => {
                terminal.render_controls(&dashboard.controls().await);
                terminal.render_stats();
            }
            UiEvent::Set { control, value } => {
                if let Err(e) = dashboard.set_control(control, &value).await {
                    terminal.print_error(&e);
                }
            }
            UiEvent::Help => terminal.print_help(),
            UiEvent::Quit => break,
        }
    }

    log::info!("[dashboard] Session ended");
    Ok(())
}
