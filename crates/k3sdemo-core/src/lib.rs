//! k3sdemo core: transport-agnostic primitives shared by the status server.
//!
//! This crate holds the error surface, the clock and environment
//! capabilities handlers read through, the uptime formatter, and the
//! Prometheus text builder. It carries no HTTP or runtime dependencies so the
//! formatting rules can be tested without a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `StatusError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod env;
pub mod error;
pub mod exposition;
pub mod uptime;

/// Shared result type.
pub use error::{Result, StatusError};
