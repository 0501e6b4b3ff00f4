//! Cached Token Data Client
//!
//! Memoizing wrapper around a token data source, plus the polling loop
//! that drives live updates. One cache slot per client: a successful
//! fetch replaces it wholesale, a failed fetch leaves it untouched.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Notify, RwLock};

use crate::domain::snapshot::TokenSnapshot;
use crate::ports::token_data::{FetchError, TokenDataSource};

/// Cache slot contents: a snapshot plus the moment it was fetched
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub snapshot: TokenSnapshot,
    pub fetched_at: Instant,
}

impl CacheEntry {
    fn new(snapshot: TokenSnapshot) -> Self {
        Self {
            snapshot,
            fetched_at: Instant::now(),
        }
    }

    /// Whether the entry is younger than the freshness window
    pub fn is_fresh(&self, window: Duration) -> bool {
        self.fetched_at.elapsed() < window
    }

    /// Age of the entry
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }
}

/// Cached market data client for one token.
///
/// Cloning yields another handle to the same logical client: clones
/// share the cache slot. Separately constructed clients never share.
pub struct TokenDataClient<S> {
    source: Arc<S>,
    freshness_window: Duration,
    cache: Arc<RwLock<Option<CacheEntry>>>,
}

impl<S> Clone for TokenDataClient<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            freshness_window: self.freshness_window,
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<S: TokenDataSource + 'static> TokenDataClient<S> {
    /// Default freshness window for cached snapshots
    pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(30);
    /// Default interval between poll ticks
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

    /// Create a client with the default freshness window
    pub fn new(source: S) -> Self {
        Self::with_freshness_window(source, Self::DEFAULT_FRESHNESS_WINDOW)
    }

    /// Create a client with a custom freshness window
    pub fn with_freshness_window(source: S, window: Duration) -> Self {
        Self {
            source: Arc::new(source),
            freshness_window: window,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Provider identifier of the underlying source
    pub fn source_name(&self) -> &str {
        self.source.source_name()
    }

    /// Latest snapshot, served from cache while fresh.
    ///
    /// A failed fetch propagates the error and leaves any previous cache
    /// entry in place; the caller decides fallback behavior.
    pub async fn get_snapshot(&self) -> Result<TokenSnapshot, FetchError> {
        if let Some(entry) = self.cache.read().await.as_ref() {
            if entry.is_fresh(self.freshness_window) {
                tracing::debug!(age_ms = entry.age().as_millis() as u64, "using cached snapshot");
                return Ok(entry.snapshot.clone());
            }
        }

        let snapshot = self.source.fetch_snapshot().await?;

        // Replaced wholesale; concurrent callers race and the last writer wins.
        *self.cache.write().await = Some(CacheEntry::new(snapshot.clone()));

        Ok(snapshot)
    }

    /// Current cache contents regardless of freshness
    pub async fn cached(&self) -> Option<TokenSnapshot> {
        self.cache.read().await.as_ref().map(|e| e.snapshot.clone())
    }

    /// Age of the current cache entry
    pub async fn cache_age(&self) -> Option<Duration> {
        self.cache.read().await.as_ref().map(CacheEntry::age)
    }

    /// Start the repeating update loop. The first tick fires after one
    /// full interval. Each tick calls [`get_snapshot`](Self::get_snapshot);
    /// success invokes the callback, failure is logged and skipped, and
    /// the loop retries on the next tick until the handle is stopped.
    ///
    /// The callback runs on the polling task and must not block.
    pub fn start_polling<F>(&self, callback: F, interval: Duration) -> PollHandle
    where
        F: Fn(TokenSnapshot) + Send + Sync + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let wake = Arc::new(Notify::new());

        let client = self.clone();
        let flag = Arc::clone(&running);
        let waker = Arc::clone(&wake);

        tracing::info!(
            interval_secs = interval.as_secs_f64(),
            "starting price updates"
        );

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = waker.notified() => {}
                    _ = tokio::time::sleep(interval) => {}
                }

                if !flag.load(Ordering::SeqCst) {
                    break;
                }

                match client.get_snapshot().await {
                    Ok(snapshot) => callback(snapshot),
                    Err(e) => tracing::warn!(error = %e, "price update failed"),
                }
            }
            tracing::debug!("polling loop exited");
        });

        PollHandle { running, wake }
    }
}

/// Cancellation handle for a polling loop
#[derive(Debug, Clone)]
pub struct PollHandle {
    running: Arc<AtomicBool>,
    wake: Arc<Notify>,
}

impl PollHandle {
    /// Cancel future ticks. Idempotent: stopping an already-stopped
    /// handle is a no-op. A tick already in flight is never interrupted.
    /// The loop is not restartable once stopped.
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            self.wake.notify_waiters();
            tracing::info!("stopped price updates");
        }
    }

    /// Whether the loop is still scheduled to tick
    pub fn is_active(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mocks::ScriptedSource;
    use std::sync::atomic::AtomicUsize;

    fn snapshot(price: f64) -> TokenSnapshot {
        TokenSnapshot {
            price,
            market_cap: 1000.0,
            volume: 500.0,
            holders: 10,
            liquidity: 200.0,
            change_24h: 1.0,
            name: "Test Token".to_string(),
            symbol: "TEST".to_string(),
            source: "mock".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fresh_cache_skips_fetch() {
        let source = Arc::new(
            ScriptedSource::new()
                .with_ok(snapshot(0.001))
                .with_repeat(Ok(snapshot(0.999))),
        );
        let client =
            TokenDataClient::with_freshness_window(Arc::clone(&source), Duration::from_secs(30));

        let first = client.get_snapshot().await.unwrap();
        let second = client.get_snapshot().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.price, 0.001);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_expired_cache_refetches_once() {
        let source = Arc::new(
            ScriptedSource::new()
                .with_ok(snapshot(0.001))
                .with_repeat(Ok(snapshot(0.002))),
        );
        let client =
            TokenDataClient::with_freshness_window(Arc::clone(&source), Duration::from_millis(40));

        assert_eq!(client.get_snapshot().await.unwrap().price, 0.001);

        tokio::time::sleep(Duration::from_millis(80)).await;

        assert_eq!(client.get_snapshot().await.unwrap().price, 0.002);
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_entry() {
        let source = ScriptedSource::new()
            .with_ok(snapshot(0.001))
            .with_err(FetchError::DataNotFound("Mint111".to_string()))
            .with_repeat(Ok(snapshot(0.003)));
        let client = TokenDataClient::with_freshness_window(source, Duration::from_millis(20));

        client.get_snapshot().await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let err = client.get_snapshot().await.unwrap_err();
        assert!(matches!(err, FetchError::DataNotFound(_)));

        // The stale entry survives the failure.
        assert_eq!(client.cached().await.unwrap().price, 0.001);

        let next = client.get_snapshot().await.unwrap();
        assert_eq!(next.price, 0.003);
    }

    #[tokio::test]
    async fn test_error_with_empty_cache_stays_empty() {
        let source = ScriptedSource::new()
            .with_repeat(Err(FetchError::Transport("down".to_string())));
        let client = TokenDataClient::new(source);

        assert!(client.get_snapshot().await.is_err());
        assert!(client.cached().await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_the_cache_slot() {
        let source = ScriptedSource::new()
            .with_ok(snapshot(0.001))
            .with_repeat(Ok(snapshot(0.999)));
        let client = TokenDataClient::with_freshness_window(source, Duration::from_secs(30));
        let other = client.clone();

        client.get_snapshot().await.unwrap();

        assert_eq!(other.get_snapshot().await.unwrap().price, 0.001);
    }

    #[tokio::test]
    async fn test_polling_delivers_and_stops() {
        let source = ScriptedSource::new().with_repeat(Ok(snapshot(0.005)));
        // Tiny window so every tick hits the source.
        let client = TokenDataClient::with_freshness_window(source, Duration::from_millis(1));

        let delivered = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&delivered);
        let handle = client.start_polling(
            move |s| {
                assert_eq!(s.price, 0.005);
                counter.fetch_add(1, Ordering::SeqCst);
            },
            Duration::from_millis(20),
        );

        tokio::time::sleep(Duration::from_millis(120)).await;
        handle.stop();
        let count_at_stop = delivered.load(Ordering::SeqCst);
        assert!(count_at_stop >= 2, "expected at least 2 ticks, got {count_at_stop}");

        // No further ticks after stop.
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(delivered.load(Ordering::SeqCst) <= count_at_stop + 1);
        assert!(!handle.is_active());
    }

    #[tokio::test]
    async fn test_polling_failure_skips_callback_and_keeps_running() {
        let source = ScriptedSource::new()
            .with_repeat(Err(FetchError::Transport("down".to_string())));
        let client = TokenDataClient::with_freshness_window(source, Duration::from_millis(1));

        let delivered = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&delivered);
        let handle = client.start_polling(
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
            Duration::from_millis(15),
        );

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(delivered.load(Ordering::SeqCst), 0);
        assert!(handle.is_active());

        handle.stop();
        assert!(!handle.is_active());
    }

    #[tokio::test]
    async fn test_stop_twice_is_noop() {
        let source = ScriptedSource::new().with_repeat(Ok(snapshot(0.001)));
        let client = TokenDataClient::new(source);

        let handle = client.start_polling(|_| {}, Duration::from_millis(50));
        handle.stop();
        handle.stop();

        assert!(!handle.is_active());
    }

    #[tokio::test]
    async fn test_stop_before_first_tick_prevents_fetches() {
        let client = TokenDataClient::with_freshness_window(
            ScriptedSource::new().with_repeat(Ok(snapshot(0.001))),
            Duration::from_millis(1),
        );

        let handle = client.start_polling(|_| {}, Duration::from_millis(30));
        handle.stop();

        tokio::time::sleep(Duration::from_millis(90)).await;
        assert!(client.cached().await.is_none());
    }
}
