//! Top-level facade crate for k3sdemo.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use k3sdemo_core::*;
}

pub mod server {
    pub use k3sdemo_server::*;
}
