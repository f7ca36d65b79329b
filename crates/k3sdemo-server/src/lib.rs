//! k3sdemo status server library entry.
//!
//! Wires process state, config, the operational handlers, and the metrics
//! renderer into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod shutdown;
