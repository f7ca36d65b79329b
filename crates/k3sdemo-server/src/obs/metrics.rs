//! `/metrics` body rendering.

use k3sdemo_core::error::Result;
use k3sdemo_core::exposition::{Exposition, MetricKind};

use crate::app_state::AppState;

pub const UPTIME_SECONDS: &str = "k3s_app_uptime_seconds";
pub const REQUESTS_TOTAL: &str = "k3s_app_requests_total";
pub const APP_INFO: &str = "k3s_app_info";

/// Render the three families. Reads the counter without incrementing it.
pub fn render(state: &AppState) -> Result<String> {
    let uptime = state.elapsed().as_secs_f64();
    let requests = state.process().request_count();
    let id = state.identity();

    let mut e = Exposition::new();
    e.family(UPTIME_SECONDS, "Time since the application started", MetricKind::Gauge, &[], uptime)?
        .family(
            REQUESTS_TOTAL,
            "Total number of requests to the root endpoint",
            MetricKind::Counter,
            &[],
            requests,
        )?
        .family(
            APP_INFO,
            "Application information",
            MetricKind::Gauge,
            &[("version", id.version.as_str()), ("hostname", id.hostname.as_str())],
            1,
        )?;
    Ok(e.finish())
}
