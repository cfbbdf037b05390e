//! # agent-prompt
//!
//! System prompt composition for interactive CLI coding agents.
//!
//! The composed prompt is a pure function of the environment (sandbox mode,
//! git repository status, connection parameters), an optional override
//! configuration, and optional user memory.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let prompt = agent_prompt::system_prompt(Some("Prefer tabs."), None);
//! println!("{}", prompt);
//! ```
//!
//! ## Injected Environment
//!
//! ```rust
//! use agent_prompt::{MapEnv, PromptComposer, PromptConfig, PromptMapping, StaticGitDetector};
//!
//! let config = PromptConfig::new().with_mapping(
//!     PromptMapping::new("You are a terse assistant.")
//!         .with_base_url("https://api.example.com")
//!         .with_model("gpt-4"),
//! );
//!
//! let prompt = PromptComposer::new()
//!     .with_env(
//!         MapEnv::new()
//!             .with("OPENAI_BASE_URL", "https://api.example.com/")
//!             .with("OPENAI_MODEL", "gpt-4"),
//!     )
//!     .with_git_detector(StaticGitDetector(false))
//!     .with_config(config)
//!     .compose(None);
//!
//! assert!(prompt.starts_with("You are a terse assistant."));
//! assert!(prompt.contains("# Outside of Sandbox"));
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod composer;
pub mod config;
pub mod environment;
pub mod prompts;
pub mod selector;

pub use composer::{MEMORY_SEPARATOR, PromptComposer, append_user_memory, compose_with_snapshot};
pub use config::{
    ConfigError, ConnectionParams, PromptConfig, PromptMapping, Settings, SettingsLoader,
};
pub use environment::{
    EnvSource, EnvironmentSnapshot, GitDetector, MapEnv, ProcessEnv, SandboxMode,
    StaticGitDetector, WorkingDirGitDetector,
};
pub use prompts::compression_prompt;
pub use selector::{normalize_url, select_override};

/// Error type for agent-prompt operations.
///
/// Composition itself never fails; errors only come from loading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// File system operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::Serialization(e) => Error::Json(e),
            config::ConfigError::Io(e) => Error::Io(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Compose the system prompt from the process environment.
///
/// Reads `SANDBOX`, `OPENAI_BASE_URL` and `OPENAI_MODEL`, and checks the
/// current directory for a git repository.
pub fn system_prompt(user_memory: Option<&str>, config: Option<&PromptConfig>) -> String {
    let composer = PromptComposer::new();
    match config {
        Some(config) => composer.with_config(config.clone()).compose(user_memory),
        None => composer.compose(user_memory),
    }
}

/// Load project and user settings, then compose from the process environment.
pub async fn system_prompt_for_project(
    project_dir: &std::path::Path,
    user_memory: Option<&str>,
) -> Result<String> {
    let settings = SettingsLoader::load_merged(project_dir).await?;
    Ok(system_prompt(user_memory, Some(&settings.prompt)))
}
