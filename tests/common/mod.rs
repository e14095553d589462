//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_lookup;

use favprimes::lookup::{LookupError, PrimeLookup};
use favprimes::state::{AppState, Store};
use favprimes::ui::app::App;
use favprimes::ui::events::AppEvent;
use futures_core::future::BoxFuture;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::runtime::Runtime;

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Lookup fakes -------------------------------------------------------------

/// In-memory lookup with canned answers.
pub struct FakeLookup {
    answers: HashMap<i64, i64>,
    fail: bool,
    delay: Duration,
    calls: AtomicUsize,
}

impl FakeLookup {
    pub fn with_answers(answers: &[(i64, i64)]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            fail: false,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_answers(&[])
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PrimeLookup for FakeLookup {
    fn nth_prime(&self, n: i64) -> BoxFuture<'_, Result<Option<i64>, LookupError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.fail {
                return Err(LookupError::Status { status: 503 });
            }
            Ok(self.answers.get(&n).copied())
        })
    }
}

// -- App helpers --------------------------------------------------------------

pub struct TestApp {
    pub app: App,
    pub events: Receiver<AppEvent>,
    pub lookup: Arc<FakeLookup>,
    // Keeps lookup tasks running while the test waits on `events`.
    pub runtime: Runtime,
}

impl TestApp {
    pub fn new(lookup: FakeLookup, initial: AppState) -> Self {
        let runtime = Runtime::new().expect("Failed to start runtime");
        let (tx, rx) = mpsc::channel();
        let lookup = Arc::new(lookup);
        let app = App::new(
            Store::new(initial),
            Arc::clone(&lookup) as Arc<dyn PrimeLookup>,
            runtime.handle().clone(),
            tx,
        );
        Self {
            app,
            events: rx,
            lookup,
            runtime,
        }
    }

    /// Wait for the next lookup result and feed it to the app.
    pub fn deliver_next_lookup(&mut self) -> (u64, Option<i64>) {
        loop {
            match self.events.recv_timeout(Duration::from_secs(5)) {
                Ok(AppEvent::NthPrime { request_id, prime }) => {
                    self.app.on_nth_prime(request_id, prime);
                    return (request_id, prime);
                }
                Ok(_) => continue,
                Err(err) => panic!("no lookup result: {err:?}"),
            }
        }
    }
}
