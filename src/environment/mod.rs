//! Runtime environment resolution.
//!
//! Reads the ambient signals that steer prompt composition (sandbox mode and
//! git repository status) into an immutable [`EnvironmentSnapshot`].

mod git;
mod source;

pub use git::{GitDetector, StaticGitDetector, WorkingDirGitDetector, is_git_repository};
pub use source::{EnvSource, MapEnv, ProcessEnv};

/// Environment variable names read during composition.
pub mod vars {
    /// Sandbox indicator set by the launcher.
    pub const SANDBOX: &str = "SANDBOX";
    /// Base URL of the OpenAI-compatible endpoint.
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    /// Model name sent to the endpoint.
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
}

/// `SANDBOX` value used by the macOS seatbelt launcher.
pub const SEATBELT_SANDBOX_VALUE: &str = "sandbox-exec";

/// Execution confinement the agent runs under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SandboxMode {
    #[default]
    None,
    Generic,
    Seatbelt,
}

impl SandboxMode {
    /// Maps a raw `SANDBOX` value to a mode.
    ///
    /// Unrecognized non-empty values are treated as a generic sandbox.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            None | Some("") => SandboxMode::None,
            Some(SEATBELT_SANDBOX_VALUE) => SandboxMode::Seatbelt,
            Some(_) => SandboxMode::Generic,
        }
    }

    pub fn is_sandboxed(&self) -> bool {
        !matches!(self, SandboxMode::None)
    }
}

impl std::fmt::Display for SandboxMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SandboxMode::None => write!(f, "none"),
            SandboxMode::Generic => write!(f, "generic"),
            SandboxMode::Seatbelt => write!(f, "seatbelt"),
        }
    }
}

/// Environment captured once per composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    pub sandbox_mode: SandboxMode,
    pub in_git_repo: bool,
}

impl EnvironmentSnapshot {
    pub fn new(sandbox_mode: SandboxMode, in_git_repo: bool) -> Self {
        Self {
            sandbox_mode,
            in_git_repo,
        }
    }

    /// Reads the sandbox variable from `env` and asks `git` for repository status.
    ///
    /// Never fails. The git detector is invoked on every call.
    pub fn resolve(env: &dyn EnvSource, git: &dyn GitDetector) -> Self {
        let sandbox = env.var(vars::SANDBOX);
        let snapshot = Self {
            sandbox_mode: SandboxMode::from_env_value(sandbox.as_deref()),
            in_git_repo: git.is_git_repository(),
        };
        tracing::debug!(
            source = env.name(),
            sandbox_mode = %snapshot.sandbox_mode,
            in_git_repo = snapshot.in_git_repo,
            "Resolved prompt environment"
        );
        snapshot
    }
}
