//! Tracker Orchestrator
//!
//! Wires the cached data client to the terminal display. Owns the
//! application state for one tracked token with lifecycle "created at
//! startup, torn down at process exit".

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Notify, RwLock};

use crate::application::data_client::TokenDataClient;
use crate::domain::display::DisplayBoard;
use crate::domain::snapshot::TokenSnapshot;
use crate::ports::token_data::TokenDataSource;

/// Default 24h move (percent) that triggers an alert
pub const DEFAULT_ALERT_THRESHOLD_PCT: f64 = 10.0;

/// Buffered updates between the polling task and the render loop
const UPDATE_CHANNEL_SIZE: usize = 16;

/// Main tracker orchestrator: one data client feeding one display board
pub struct TrackerOrchestrator<S> {
    client: TokenDataClient<S>,
    board: Arc<RwLock<DisplayBoard>>,
    poll_interval: Duration,
    alert_threshold_pct: f64,
    is_running: Arc<RwLock<bool>>,
    shutdown: Arc<Notify>,
}

/// Status snapshot of the tracker
#[derive(Debug, Clone)]
pub struct TrackerStatus {
    pub is_running: bool,
    pub last_price: Option<f64>,
    pub source: Option<String>,
}

impl<S: TokenDataSource + 'static> TrackerOrchestrator<S> {
    /// Create a tracker around an existing client
    pub fn new(client: TokenDataClient<S>, headline_symbol: impl Into<String>) -> Self {
        Self {
            client,
            board: Arc::new(RwLock::new(DisplayBoard::new(headline_symbol))),
            poll_interval: TokenDataClient::<S>::DEFAULT_POLL_INTERVAL,
            alert_threshold_pct: DEFAULT_ALERT_THRESHOLD_PCT,
            is_running: Arc::new(RwLock::new(false)),
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Set a custom poll interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the 24h move (percent) that triggers an alert
    pub fn with_alert_threshold(mut self, threshold_pct: f64) -> Self {
        self.alert_threshold_pct = threshold_pct;
        self
    }

    /// Run until stopped.
    ///
    /// A failed initial load falls open to the placeholder display; the
    /// polling loop keeps retrying at its own cadence, so the tracker
    /// recovers as soon as the provider does.
    pub async fn run(&self) {
        *self.is_running.write().await = true;

        tracing::info!(
            source = self.client.source_name(),
            poll_secs = self.poll_interval.as_secs_f64(),
            "starting tracker"
        );

        match self.client.get_snapshot().await {
            Ok(snapshot) => self.on_update(snapshot).await,
            Err(e) => {
                tracing::warn!(error = %e, "initial token data load failed - continuing with placeholder display");
                println!("{}", self.board.read().await.render());
            }
        }

        let (tx, mut rx) = mpsc::channel::<TokenSnapshot>(UPDATE_CHANNEL_SIZE);
        let handle = self.client.start_polling(
            move |snapshot| {
                // try_send keeps the polling task from blocking on a slow consumer
                if tx.try_send(snapshot).is_err() {
                    tracing::debug!("display channel full - dropping update");
                }
            },
            self.poll_interval,
        );

        loop {
            tokio::select! {
                maybe = rx.recv() => match maybe {
                    Some(snapshot) => self.on_update(snapshot).await,
                    None => break,
                },
                _ = self.shutdown.notified() => break,
            }
        }

        handle.stop();
        *self.is_running.write().await = false;
        tracing::info!("tracker stopped");
    }

    async fn on_update(&self, snapshot: TokenSnapshot) {
        if snapshot.is_significant_move(self.alert_threshold_pct) {
            let direction = if snapshot.change_24h > 0.0 { "up" } else { "down" };
            tracing::warn!(
                change_pct = snapshot.change_24h,
                "price {} {:.2}% over 24h",
                direction,
                snapshot.change_24h.abs()
            );
        }

        let mut board = self.board.write().await;
        board.apply(snapshot);
        println!("{}", board.render());
    }

    /// Signal the run loop to exit. Idempotent and cooperative: an
    /// update being rendered is never interrupted.
    pub async fn stop(&self) {
        *self.is_running.write().await = false;
        // notify_one stores a permit, so a stop issued mid-render still lands.
        self.shutdown.notify_one();
        tracing::info!("stop signal sent to tracker");
    }

    /// Current status snapshot
    pub async fn status(&self) -> TrackerStatus {
        let board = self.board.read().await;
        TrackerStatus {
            is_running: *self.is_running.read().await,
            last_price: board.snapshot().map(|s| s.price),
            source: board.snapshot().map(|s| s.source.clone()),
        }
    }
}

// Clone shares state so the tracker can be stopped from another task.
impl<S> Clone for TrackerOrchestrator<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            board: Arc::clone(&self.board),
            poll_interval: self.poll_interval,
            alert_threshold_pct: self.alert_threshold_pct,
            is_running: Arc::clone(&self.is_running),
            shutdown: Arc::clone(&self.shutdown),
        }
    }
}
