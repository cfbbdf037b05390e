//! Environment variable sources.
//!
//! Composition never reads `std::env` directly. It goes through an [`EnvSource`],
//! so tests can hand in a fixed map instead of mutating the process environment.

use std::collections::HashMap;

/// Read-only lookup of environment variables.
pub trait EnvSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &str;

    /// Value of `key`, or `None` if unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
///
/// Values that are not valid unicode are reported as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvSource for ProcessEnv {
    fn name(&self) -> &str {
        "process"
    }

    fn var(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(e) => {
                tracing::debug!(key, error = %e, "Ignoring non-unicode environment variable");
                None
            }
        }
    }
}

/// In-memory environment, useful for tests and embedding hosts that
/// already hold their own configuration.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable (builder pattern)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for MapEnv {
    fn name(&self) -> &str {
        "map"
    }

    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
