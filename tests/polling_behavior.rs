//! Polling cadence and response ordering tests.
//!
//! These run on tokio's paused clock against an in-memory backend, so the
//! 30 second cadence can be checked exactly:
//! 1. No fetch before the first full interval
//! 2. One fetch per interval, never more or less
//! 3. Slow fetches don't delay the next tick
//! 4. Overlapping poll and manual refresh apply last-response-wins

use async_trait::async_trait;
use pr_activity_dashboard_lib::commands::DashboardView;
use pr_activity_dashboard_lib::error::AppError;
use pr_activity_dashboard_lib::models::{NotificationReply, PreferenceSet, StatsSnapshot};
use pr_activity_dashboard_lib::services::stats_poller::STATS_REFRESH_INTERVAL;
use pr_activity_dashboard_lib::services::{DashboardBackend, ManualRefresh, StatsPoller};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::Instant;

const SNAPSHOT: StatsSnapshot = StatsSnapshot {
    last_update: 1_700_000_000,
    number_of_active_pr_comments: 2,
    number_of_active_pr_tasks: 4,
};

/// Backend that answers `/stats` immediately (or after a fixed delay) and
/// records when each request was issued.
#[derive(Default)]
struct ClockedBackend {
    stats_delay: Option<Duration>,
    stats_calls: Mutex<Vec<Instant>>,
}

impl ClockedBackend {
    fn call_count(&self) -> usize {
        self.stats_calls.lock().unwrap().len()
    }

    fn call_offsets(&self, start: Instant) -> Vec<u64> {
        self.stats_calls
            .lock()
            .unwrap()
            .iter()
            .map(|at| at.duration_since(start).as_secs())
            .collect()
    }
}

#[async_trait]
impl DashboardBackend for ClockedBackend {
    async fn load_preferences(&self) -> Result<Option<PreferenceSet>, AppError> {
        Ok(None)
    }

    async fn save_preferences(&self, _prefs: &PreferenceSet) -> Result<(), AppError> {
        Ok(())
    }

    async fn fetch_stats(&self) -> Result<Option<StatsSnapshot>, AppError> {
        self.stats_calls.lock().unwrap().push(Instant::now());
        if let Some(delay) = self.stats_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(Some(SNAPSHOT))
    }

    async fn force_update(&self) -> Result<Option<StatsSnapshot>, AppError> {
        Ok(Some(SNAPSHOT))
    }

    async fn send_test_notification(&self) -> Result<NotificationReply, AppError> {
        Err(AppError::internal("not used"))
    }
}

#[tokio::test(start_paused = true)]
async fn test_poller_fires_every_thirty_seconds() {
    assert_eq!(STATS_REFRESH_INTERVAL, Duration::from_secs(30));

    let backend = Arc::new(ClockedBackend::default());
    let view = Arc::new(DashboardView::new());
    let start = Instant::now();
    let _handle = StatsPoller::new(backend.clone(), view.clone()).start();

    tokio::time::sleep(Duration::from_secs(29)).await;
    assert_eq!(backend.call_count(), 0);
    assert!(view.stats().is_none());

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(backend.call_count(), 1);
    assert_eq!(view.stats().unwrap().active_tasks, "4");

    // t = 331s: ticks at 30, 60, ..., 330
    tokio::time::sleep(Duration::from_secs(300)).await;
    assert_eq!(
        backend.call_offsets(start),
        (1..=11).map(|n| n * 30).collect::<Vec<u64>>()
    );
    assert!(view.alerts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_slow_fetch_does_not_delay_next_tick() {
    let backend = Arc::new(ClockedBackend {
        stats_delay: Some(Duration::from_secs(45)),
        ..Default::default()
    });
    let view = Arc::new(DashboardView::new());
    let start = Instant::now();
    let _handle = StatsPoller::new(backend.clone(), view.clone()).start();

    tokio::time::sleep(Duration::from_secs(61)).await;
    assert_eq!(backend.call_offsets(start), vec![30, 60]);
    // First response lands at 75s
    assert!(view.stats().is_none());

    tokio::time::sleep(Duration::from_secs(15)).await;
    assert!(view.stats().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_stopped_poller_schedules_nothing() {
    let backend = Arc::new(ClockedBackend::default());
    let view = Arc::new(DashboardView::new());
    let handle = StatsPoller::new(backend.clone(), view).start();

    tokio::time::sleep(Duration::from_secs(31)).await;
    assert_eq!(backend.call_count(), 1);

    handle.stop();
    assert!(handle.is_stopped());

    tokio::time::sleep(Duration::from_secs(300)).await;
    assert_eq!(backend.call_count(), 1);
}

/// Backend whose `/stats` and `/update` answers are released by the test.
struct GatedBackend {
    issued: Mutex<Vec<&'static str>>,
    stats_gate: Mutex<Option<oneshot::Receiver<StatsSnapshot>>>,
    update_gate: Mutex<Option<oneshot::Receiver<StatsSnapshot>>>,
}

impl GatedBackend {
    async fn wait(
        &self,
        name: &'static str,
        gate: &Mutex<Option<oneshot::Receiver<StatsSnapshot>>>,
    ) -> Result<Option<StatsSnapshot>, AppError> {
        self.issued.lock().unwrap().push(name);
        let rx = gate.lock().unwrap().take();
        match rx {
            Some(rx) => rx
                .await
                .map(Some)
                .map_err(|_| AppError::network("gate dropped")),
            None => Err(AppError::internal("gate already used")),
        }
    }
}

#[async_trait]
impl DashboardBackend for GatedBackend {
    async fn load_preferences(&self) -> Result<Option<PreferenceSet>, AppError> {
        Ok(None)
    }

    async fn save_preferences(&self, _prefs: &PreferenceSet) -> Result<(), AppError> {
        Ok(())
    }

    async fn fetch_stats(&self) -> Result<Option<StatsSnapshot>, AppError> {
        self.wait("stats", &self.stats_gate).await
    }

    async fn force_update(&self) -> Result<Option<StatsSnapshot>, AppError> {
        self.wait("update", &self.update_gate).await
    }

    async fn send_test_notification(&self) -> Result<NotificationReply, AppError> {
        Err(AppError::internal("not used"))
    }
}

#[tokio::test]
async fn test_last_response_wins() {
    let (stats_tx, stats_rx) = oneshot::channel();
    let (update_tx, update_rx) = oneshot::channel();
    let backend = Arc::new(GatedBackend {
        issued: Mutex::new(Vec::new()),
        stats_gate: Mutex::new(Some(stats_rx)),
        update_gate: Mutex::new(Some(update_rx)),
    });
    let view = Arc::new(DashboardView::new());

    let poller = StatsPoller::new(backend.clone(), view.clone());
    let refresh = ManualRefresh::new(backend.clone(), view.clone());

    let poll_task = tokio::spawn(async move { poller.poll_once().await });
    tokio::task::yield_now().await;
    let refresh_task = tokio::spawn(async move { refresh.run().await });
    tokio::task::yield_now().await;
    assert_eq!(*backend.issued.lock().unwrap(), vec!["stats", "update"]);

    // Manual refresh was issued second but answers first
    update_tx
        .send(StatsSnapshot {
            last_update: 1_700_000_600,
            number_of_active_pr_comments: 9,
            number_of_active_pr_tasks: 9,
        })
        .unwrap();
    refresh_task.await.unwrap();
    assert_eq!(view.stats().unwrap().active_comments, "9");

    // The older poll response then overwrites it
    stats_tx
        .send(StatsSnapshot {
            last_update: 1_700_000_000,
            number_of_active_pr_comments: 1,
            number_of_active_pr_tasks: 0,
        })
        .unwrap();
    poll_task.await.unwrap();

    let shown = view.stats().unwrap();
    assert_eq!(shown.active_comments, "1");
    assert_eq!(shown.active_tasks, "0");
    assert!(view.alerts().is_empty());
}
