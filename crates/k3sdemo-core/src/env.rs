//! Environment lookups for pod identity.
//!
//! Values are resolved on every request, never cached, so a handler always
//! reflects the current process environment. Absent or non-Unicode values
//! fall back to fixed defaults and never fault.

use std::collections::HashMap;

/// Read-only source of named string variables.
pub trait EnvSource: Send + Sync + 'static {
    fn get(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(v) => Some(v),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!(key, "environment variable is not valid unicode; using default");
                None
            }
        }
    }
}

/// Fixed in-memory environment (tests, embedding).
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub const APP_VERSION: &str = "APP_VERSION";
pub const HOSTNAME: &str = "HOSTNAME";
pub const REPLICAS: &str = "REPLICAS";
pub const DEPLOY_COUNT: &str = "DEPLOY_COUNT";
pub const ENVIRONMENT: &str = "ENVIRONMENT";

/// Pod identity resolved from an `EnvSource` at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodIdentity {
    pub version: String,
    pub hostname: String,
    pub replicas: String,
    pub deploy_count: String,
    pub environment: String,
}

impl PodIdentity {
    pub fn resolve(env: &dyn EnvSource) -> Self {
        let var = |key: &str, default: &str| env.get(key).unwrap_or_else(|| default.to_string());
        Self {
            version: var(APP_VERSION, "1.0.0"),
            hostname: var(HOSTNAME, "unknown"),
            replicas: var(REPLICAS, "2"),
            deploy_count: var(DEPLOY_COUNT, "1"),
            environment: var(ENVIRONMENT, "production"),
        }
    }
}
