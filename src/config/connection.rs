//! Connection parameters used as the override matching key.

use crate::environment::{EnvSource, vars};

/// Effective endpoint and model of the underlying LLM connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionParams {
    pub base_url: Option<String>,
    pub model_name: Option<String>,
}

impl ConnectionParams {
    pub fn new(base_url: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            model_name: Some(model_name.into()),
        }
    }

    /// Reads `OPENAI_BASE_URL` and `OPENAI_MODEL`.
    pub fn from_env(env: &dyn EnvSource) -> Self {
        Self {
            base_url: env.var(vars::OPENAI_BASE_URL),
            model_name: env.var(vars::OPENAI_MODEL),
        }
    }

    /// Both values present, as required for matching.
    pub fn as_pair(&self) -> Option<(&str, &str)> {
        Some((self.base_url.as_deref()?, self.model_name.as_deref()?))
    }
}
