//! Test Doubles for Ports
//!
//! Scripted token data source that records fetch calls and replays
//! configured results. Used by unit and integration tests; never talks
//! to the network.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::snapshot::TokenSnapshot;

use super::token_data::{FetchError, TokenDataSource};

/// Scripted data source: pops one queued result per fetch, then keeps
/// replaying the configured repeat result once the queue is empty.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<TokenSnapshot, FetchError>>>,
    repeat: Mutex<Option<Result<TokenSnapshot, FetchError>>>,
    fetch_count: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to queue one successful fetch
    pub fn with_ok(self, snapshot: TokenSnapshot) -> Self {
        self.script.lock().unwrap().push_back(Ok(snapshot));
        self
    }

    /// Builder method to queue one failed fetch
    pub fn with_err(self, error: FetchError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Builder method to set the result replayed after the queue drains
    pub fn with_repeat(self, result: Result<TokenSnapshot, FetchError>) -> Self {
        *self.repeat.lock().unwrap() = Some(result);
        self
    }

    /// Number of fetches performed so far
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenDataSource for ScriptedSource {
    fn source_name(&self) -> &str {
        "mock"
    }

    async fn fetch_snapshot(&self) -> Result<TokenSnapshot, FetchError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if let Some(next) = self.script.lock().unwrap().pop_front() {
            return next;
        }

        self.repeat
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(FetchError::Transport("script exhausted".to_string())))
    }
}
