//! Override configuration and settings loading.
//!
//! ```rust,no_run
//! use agent_prompt::config::SettingsLoader;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = SettingsLoader::load_merged(std::path::Path::new(".")).await?;
//! let prompt = agent_prompt::system_prompt(None, Some(&settings.prompt));
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod mapping;
pub mod settings;

pub use connection::ConnectionParams;
pub use mapping::{PromptConfig, PromptMapping};
pub use settings::{Settings, SettingsLoader, SettingsSource};

use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
