//! Dashboard services.
//!
//! This module contains the client core: the backend transport, the
//! preference store, the statistics poller, manual refresh and the test
//! notification trigger.
//!
//! Services only talk to a [`DashboardBackend`] and a [`DisplaySink`], so
//! they are testable without a network or a UI.

pub mod backend;
pub mod backend_client;
pub mod display;
pub mod manual_refresh;
pub mod notification_trigger;
pub mod preference_store;
pub mod stats_poller;

pub use backend::DashboardBackend;
pub use backend_client::{BackendClient, BackendClientConfig};
pub use display::{DisplaySink, StatsDisplay};
pub use manual_refresh::ManualRefresh;
pub use notification_trigger::NotificationTrigger;
pub use preference_store::PreferenceStore;
pub use stats_poller::{PollerHandle, StatsPoller};
