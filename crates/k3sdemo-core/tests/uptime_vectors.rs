//! Uptime formatting vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::time::Duration;

use serde::Deserialize;

use k3sdemo_core::uptime::{format_elapsed, format_uptime};

#[derive(Debug, Deserialize)]
struct UptimeVector {
    description: String,
    seconds: u64,
    expect: String,
}

fn load() -> Vec<UptimeVector> {
    let s = fs::read_to_string("tests/vectors/uptime.json").unwrap();
    serde_json::from_str(&s).expect("invalid uptime vectors")
}

#[test]
fn uptime_vectors() {
    for v in load() {
        assert_eq!(format_uptime(v.seconds), v.expect, "{}", v.description);
    }
}

#[test]
fn sub_second_remainder_is_truncated() {
    assert_eq!(format_elapsed(Duration::from_millis(999)), "0s");
    assert_eq!(format_elapsed(Duration::from_millis(125_900)), "2m 5s");
}
