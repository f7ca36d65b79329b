//! Shared application state for the status server.
//!
//! One `AppState` is built at bootstrap and cloned into every handler. It owns
//! the process start time (write-once) and the root request counter, and
//! carries the clock and environment capabilities handlers read through.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use k3sdemo_core::clock::{self, Clock, SystemClock};
use k3sdemo_core::env::{EnvSource, PodIdentity, ProcessEnv};

use crate::config::ServerConfig;

/// Process-lifetime state: start time plus the root request counter.
#[derive(Debug)]
pub struct ProcessState {
    start_time: DateTime<Utc>,
    request_count: AtomicU64,
}

impl ProcessState {
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self { start_time, request_count: AtomicU64::new(0) }
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Increment and return the post-increment value.
    pub fn record_request(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    clock: Arc<dyn Clock>,
    env: Arc<dyn EnvSource>,
    process: ProcessState,
}

impl AppState {
    /// Production state: system clock and process environment.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_capabilities(cfg, Arc::new(SystemClock), Arc::new(ProcessEnv))
    }

    /// Build state over explicit capabilities. The start time is read from
    /// `clock` once, here.
    pub fn with_capabilities(cfg: ServerConfig, clock: Arc<dyn Clock>, env: Arc<dyn EnvSource>) -> Self {
        let process = ProcessState::new(clock.now());
        Self {
            inner: Arc::new(AppStateInner { cfg, clock, env, process }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn process(&self) -> &ProcessState {
        &self.inner.process
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.inner.clock.now()
    }

    pub fn elapsed(&self) -> Duration {
        clock::elapsed_since(self.inner.process.start_time(), self.now())
    }

    /// Resolve pod identity from the environment (not cached).
    pub fn identity(&self) -> PodIdentity {
        PodIdentity::resolve(self.inner.env.as_ref())
    }
}
