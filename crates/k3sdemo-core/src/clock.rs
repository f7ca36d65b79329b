//! Wall-clock capability.
//!
//! Handlers never call `Utc::now()` directly; they read time through a
//! `Clock` so tests can pin and advance it.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

/// Source of the current UTC time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Real system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock for tests: a fixed base plus a manually advanced offset.
#[derive(Debug)]
pub struct ManualClock {
    base: DateTime<Utc>,
    offset_micros: AtomicI64,
}

impl ManualClock {
    pub fn new(base: DateTime<Utc>) -> Self {
        Self { base, offset_micros: AtomicI64::new(0) }
    }

    /// Move the clock forward. Saturates instead of overflowing.
    pub fn advance(&self, by: Duration) {
        let micros = i64::try_from(by.as_micros()).unwrap_or(i64::MAX);
        // The closure always returns `Some`, so `fetch_update` cannot fail.
        let _ = self.offset_micros.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |cur| {
            Some(cur.saturating_add(micros))
        });
    }

    /// Move the clock backward (simulates a wall-clock step).
    pub fn rewind(&self, by: Duration) {
        let micros = i64::try_from(by.as_micros()).unwrap_or(i64::MAX);
        // Infallible, as in `advance`.
        let _ = self.offset_micros.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |cur| {
            Some(cur.saturating_sub(micros))
        });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let offset = TimeDelta::microseconds(self.offset_micros.load(Ordering::SeqCst));
        self.base.checked_add_signed(offset).unwrap_or(self.base)
    }
}

/// Elapsed time between `start` and `now`, clamped to zero when the clock
/// reads earlier than `start`.
pub fn elapsed_since(start: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (now - start).to_std().unwrap_or(Duration::ZERO)
}

/// ISO-8601 / RFC 3339 rendering used in every response body.
pub fn iso8601(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
