//! Environment-dependent sections.
//!
//! Exactly one sandbox section is emitted per prompt; the git section only when
//! the working directory is inside a repository.

use super::tools::fill_tool_names;
use crate::environment::SandboxMode;

pub const OUTSIDE_SANDBOX_SECTION: &str = r#"# Outside of Sandbox

You are running outside of a sandbox container, directly on the user's system. For critical commands that are particularly likely to modify the user's system outside of the project directory or system temp directory, remind the user to consider enabling sandboxing as you explain the command."#;

pub const GENERIC_SANDBOX_SECTION: &str = r#"# Sandbox

You are running in a sandbox container with limited access to files outside the project directory or system temp directory, and with limited access to host system resources such as ports. If you encounter failures that could be due to sandboxing (e.g. a command fails with 'Operation not permitted' or similar), report the error to the user and explain why you think it could be due to sandboxing and how the user may need to adjust their sandbox configuration."#;

pub const SEATBELT_SANDBOX_SECTION: &str = r#"# MacOS Seatbelt

You are running under macOS seatbelt with limited access to files outside the project directory or system temp directory, and with limited access to host system resources such as ports. If you encounter failures that could be due to MacOS Seatbelt (e.g. a command fails with 'Operation not permitted' or similar), report the error to the user and explain why you think it could be due to MacOS Seatbelt and how the user may need to adjust their Seatbelt profile."#;

/// Section describing the execution confinement for `mode`.
pub fn sandbox_section(mode: SandboxMode) -> &'static str {
    match mode {
        SandboxMode::None => OUTSIDE_SANDBOX_SECTION,
        SandboxMode::Generic => GENERIC_SANDBOX_SECTION,
        SandboxMode::Seatbelt => SEATBELT_SANDBOX_SECTION,
    }
}

const GIT_SECTION_TEMPLATE: &str = r#"# Git Repository

- The current working (project) directory is managed by a git repository.
- When asked to commit changes or prepare a commit, always start by gathering information with shell commands:
  - `git status` to make sure all relevant files are tracked and staged, using `git add ...` as needed.
  - `git diff HEAD` to review all changes (including unstaged ones) to tracked files since the last commit.
    - `git diff --staged` to review only staged changes when a partial commit makes sense or was requested.
  - `git log -n 3` to review recent commit messages and match their style (verbosity, formatting, signature line).
- Combine shell commands whenever possible to save time, e.g. `git status && git diff HEAD && git log -n 3`.
- Always propose a draft commit message. Never just ask the user for the full message.
- Prefer commit messages that are clear and concise and focus more on "why" than "what".
- Keep the user informed and ask for clarification or confirmation where needed.
- After each commit, confirm it succeeded by running `git status` through '{SHELL}'.
- If a commit fails, never attempt to work around the issue without being asked to.
- Never push changes to a remote repository without being asked explicitly by the user."#;

/// Git workflow guidance for repositories.
pub fn git_section() -> String {
    fill_tool_names(GIT_SECTION_TEMPLATE)
}
