//! Git repository detection.

use std::path::{Path, PathBuf};

/// Answers whether the current working context is inside a git repository.
pub trait GitDetector: Send + Sync {
    fn is_git_repository(&self) -> bool;
}

/// Looks for a `.git` entry in a directory or any of its ancestors.
///
/// `.git` may be a directory or a file (worktrees and submodules use a file).
/// Without an explicit directory the current working directory is used at
/// detection time; if it cannot be read the answer is `false`.
#[derive(Debug, Clone, Default)]
pub struct WorkingDirGitDetector {
    dir: Option<PathBuf>,
}

impl WorkingDirGitDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }
}

impl GitDetector for WorkingDirGitDetector {
    fn is_git_repository(&self) -> bool {
        match &self.dir {
            Some(dir) => is_git_repository(dir),
            None => std::env::current_dir()
                .map(|cwd| is_git_repository(&cwd))
                .unwrap_or(false),
        }
    }
}

/// Fixed answer, for hosts that already know and for tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticGitDetector(pub bool);

impl GitDetector for StaticGitDetector {
    fn is_git_repository(&self) -> bool {
        self.0
    }
}

impl<F> GitDetector for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_git_repository(&self) -> bool {
        self()
    }
}

/// Checks `dir` and its ancestors for a `.git` entry.
pub fn is_git_repository(dir: &Path) -> bool {
    dir.ancestors().any(|d| d.join(".git").exists())
}
