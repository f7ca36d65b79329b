//! Prometheus exposition for the status server.
//!
//! The service exports three fixed families rendered straight from process
//! state on each scrape; no registry is kept between scrapes.

pub mod metrics;
