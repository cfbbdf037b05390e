//! System prompt composer.
//!
//! Combines the prompt body (an override template or the built-in prompt) with
//! the environment-dependent sections and the caller's memory.

use std::sync::Arc;

use crate::config::{ConnectionParams, PromptConfig};
use crate::environment::{
    EnvSource, EnvironmentSnapshot, GitDetector, ProcessEnv, WorkingDirGitDetector,
};
use crate::prompts::{base_prompt, final_reminder, git_section, sandbox_section};
use crate::selector::select_override;

/// Separator placed between the prompt and user memory.
pub const MEMORY_SEPARATOR: &str = "\n\n---\n\n";

/// System prompt composer.
///
/// # Prompt Structure
///
/// 1. **Body**: the first matching override template, verbatim, or the built-in prompt
/// 2. **Sandbox section**: exactly one of outside / generic sandbox / macOS seatbelt
/// 3. **Git section**: only inside a git repository
/// 4. **Final reminder**: only with the built-in body
/// 5. **User memory**: after [`MEMORY_SEPARATOR`], only if non-blank
///
/// Parts 1–4 are joined with a blank line.
#[derive(Clone)]
pub struct PromptComposer {
    env: Arc<dyn EnvSource>,
    git: Arc<dyn GitDetector>,
    config: PromptConfig,
}

impl std::fmt::Debug for PromptComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptComposer")
            .field("env", &self.env.name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptComposer {
    /// Reads the process environment and detects git from the current directory.
    pub fn new() -> Self {
        Self {
            env: Arc::new(ProcessEnv::new()),
            git: Arc::new(WorkingDirGitDetector::new()),
            config: PromptConfig::default(),
        }
    }

    /// Set the environment variable source.
    pub fn with_env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Set the git repository detector.
    pub fn with_git_detector(mut self, git: impl GitDetector + 'static) -> Self {
        self.git = Arc::new(git);
        self
    }

    /// Set the override configuration.
    pub fn with_config(mut self, config: PromptConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the current override configuration.
    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Compose the system prompt.
    ///
    /// Captures the environment once, then delegates to [`compose_with_snapshot`].
    /// Never fails; missing or unmatched configuration falls back to the built-in prompt.
    pub fn compose(&self, user_memory: Option<&str>) -> String {
        let snapshot = EnvironmentSnapshot::resolve(self.env.as_ref(), self.git.as_ref());
        let params = ConnectionParams::from_env(self.env.as_ref());
        compose_with_snapshot(&snapshot, &params, Some(&self.config), user_memory)
    }
}

/// Pure composition over explicit inputs.
pub fn compose_with_snapshot(
    snapshot: &EnvironmentSnapshot,
    params: &ConnectionParams,
    config: Option<&PromptConfig>,
    user_memory: Option<&str>,
) -> String {
    let mappings = config.and_then(PromptConfig::mappings);
    let override_template = select_override(mappings, params);

    let mut parts: Vec<String> = Vec::with_capacity(4);

    match override_template {
        Some(template) => parts.push(template.to_string()),
        None => parts.push(base_prompt()),
    }

    parts.push(sandbox_section(snapshot.sandbox_mode).to_string());

    if snapshot.in_git_repo {
        parts.push(git_section());
    }

    if override_template.is_none() {
        parts.push(final_reminder());
    }

    append_user_memory(parts.join("\n\n"), user_memory)
}

/// Appends trimmed memory after [`MEMORY_SEPARATOR`]. Blank or absent memory
/// leaves `body` untouched.
///
/// Trimming removes Unicode whitespace plus the byte order mark (U+FEFF), which
/// editors often leave at the start of memory files.
pub fn append_user_memory(mut body: String, user_memory: Option<&str>) -> String {
    let memory = user_memory.map(trim_memory).unwrap_or_default();
    if memory.is_empty() {
        return body;
    }

    body.reserve(MEMORY_SEPARATOR.len() + memory.len());
    body.push_str(MEMORY_SEPARATOR);
    body.push_str(memory);
    body
}

fn trim_memory(memory: &str) -> &str {
    memory.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PromptMapping;
    use crate::environment::{MapEnv, SandboxMode, StaticGitDetector, vars};
    use crate::prompts::{
        AGENT_IDENTITY, GENERIC_SANDBOX_SECTION, OUTSIDE_SANDBOX_SECTION,
        SEATBELT_SANDBOX_SECTION,
    };

    fn composer(env: MapEnv, in_git: bool) -> PromptComposer {
        PromptComposer::new()
            .with_env(env)
            .with_git_detector(StaticGitDetector(in_git))
    }

    #[test]
    fn test_default_prompt() {
        let prompt = composer(MapEnv::new(), false).compose(None);

        assert!(prompt.starts_with(AGENT_IDENTITY));
        assert!(prompt.contains("# Outside of Sandbox"));
        assert!(!prompt.contains("# Git Repository"));
        assert!(prompt.ends_with(&final_reminder()));
        assert!(!prompt.contains("---\n\n"));
    }

    #[test]
    fn test_blank_memory_adds_nothing() {
        let composer = composer(MapEnv::new(), false);
        let base = composer.compose(None);

        assert_eq!(composer.compose(Some("")), base);
        assert_eq!(composer.compose(Some("   \n  \t ")), base);
    }

    #[test]
    fn test_memory_appended_once() {
        let memory = "This is custom user memory.\nBe extra polite.";
        let prompt = composer(MapEnv::new(), false).compose(Some(memory));

        assert!(prompt.ends_with(&format!("\n\n---\n\n{memory}")));
        assert_eq!(prompt.matches(MEMORY_SEPARATOR).count(), 1);
    }

    #[test]
    fn test_memory_trimmed() {
        let body = append_user_memory("body".to_string(), Some("\n  remember this \t\n"));
        assert_eq!(body, "body\n\n---\n\nremember this");
    }

    #[test]
    fn test_memory_inner_whitespace_kept() {
        let body = append_user_memory("body".to_string(), Some("  a\n\n  b  "));
        assert_eq!(body, "body\n\n---\n\na\n\n  b");
    }

    #[test]
    fn test_sandbox_sections_exclusive() {
        let cases = [
            (None, SandboxMode::None),
            (Some(""), SandboxMode::None),
            (Some("sandbox-exec"), SandboxMode::Seatbelt),
            (Some("docker"), SandboxMode::Generic),
            (Some("true"), SandboxMode::Generic),
        ];

        for (value, mode) in cases {
            let env = match value {
                Some(v) => MapEnv::new().with(vars::SANDBOX, v),
                None => MapEnv::new(),
            };
            let prompt = composer(env, false).compose(None);

            let present: Vec<_> = [
                (SandboxMode::None, OUTSIDE_SANDBOX_SECTION),
                (SandboxMode::Generic, GENERIC_SANDBOX_SECTION),
                (SandboxMode::Seatbelt, SEATBELT_SANDBOX_SECTION),
            ]
            .into_iter()
            .filter(|(_, section)| prompt.contains(section))
            .map(|(m, _)| m)
            .collect();

            assert_eq!(present, vec![mode], "SANDBOX={value:?}");
        }
    }

    #[test]
    fn test_git_section_follows_detector() {
        assert!(composer(MapEnv::new(), true)
            .compose(None)
            .contains("# Git Repository"));
        assert!(!composer(MapEnv::new(), false)
            .compose(None)
            .contains("# Git Repository"));
    }

    #[test]
    fn test_override_replaces_body() {
        let config = PromptConfig::new().with_mapping(
            PromptMapping::new("T1")
                .with_base_url("https://api.example.com")
                .with_model("gpt-4"),
        );
        let env = MapEnv::new()
            .with(vars::OPENAI_BASE_URL, "https://api.example.com/")
            .with(vars::OPENAI_MODEL, "gpt-4")
            .with(vars::SANDBOX, "docker");

        let prompt = composer(env, true)
            .with_config(config)
            .compose(Some("mem"));

        assert!(prompt.starts_with("T1\n\n"));
        assert!(!prompt.contains(AGENT_IDENTITY));
        assert!(!prompt.contains("# Final Reminder"));
        assert!(prompt.contains(GENERIC_SANDBOX_SECTION));
        assert!(prompt.contains("# Git Repository"));
        assert!(prompt.ends_with("\n\n---\n\nmem"));
    }

    #[test]
    fn test_memory_byte_order_mark_is_blank() {
        assert_eq!(append_user_memory("body".to_string(), Some("\u{FEFF}")), "body");
        assert_eq!(
            append_user_memory("body".to_string(), Some("\u{FEFF}\n rules \u{FEFF}")),
            "body\n\n---\n\nrules"
        );
    }

    #[test]
    fn test_empty_override_template_uses_base() {
        let config = PromptConfig::new().with_mapping(
            PromptMapping::new("")
                .with_base_url("https://api.example.com")
                .with_model("gpt-4"),
        );
        let params = ConnectionParams::new("https://api.example.com", "gpt-4");

        let prompt =
            compose_with_snapshot(&EnvironmentSnapshot::default(), &params, Some(&config), None);
        assert!(prompt.starts_with(AGENT_IDENTITY));
        assert!(prompt.ends_with(&final_reminder()));
    }

    #[test]
    fn test_override_template_not_rewritten() {
        let template = "Use {READ_FILE} and {RUNTIME_VARS_SANDBOX} as-is";
        let config = PromptConfig::new().with_mapping(
            PromptMapping::new(template)
                .with_base_url("https://api.example.com")
                .with_model("gpt-4"),
        );
        let params = ConnectionParams::new("https://api.example.com", "gpt-4");

        let prompt =
            compose_with_snapshot(&EnvironmentSnapshot::default(), &params, Some(&config), None);
        assert!(prompt.starts_with(template));
    }

    #[test]
    fn test_unmatched_override_uses_base() {
        let config = PromptConfig::new().with_mapping(
            PromptMapping::new("Custom template for example.com")
                .with_base_url("https://api.example.com")
                .with_model("gpt-4"),
        );
        let params = ConnectionParams::new("https://api.different.com", "gpt-4");

        let prompt =
            compose_with_snapshot(&EnvironmentSnapshot::default(), &params, Some(&config), None);
        assert!(prompt.starts_with(AGENT_IDENTITY));
        assert!(!prompt.contains("Custom template for example.com"));
    }

    #[test]
    fn test_compose_idempotent() {
        let env = MapEnv::new().with(vars::SANDBOX, "sandbox-exec");
        let composer = composer(env, true);

        assert_eq!(composer.compose(Some("memory")), composer.compose(Some("memory")));
    }

    #[test]
    fn test_compose_with_snapshot_no_config() {
        let snapshot = EnvironmentSnapshot::new(SandboxMode::Seatbelt, false);
        let prompt =
            compose_with_snapshot(&snapshot, &ConnectionParams::default(), None, None);

        assert!(prompt.contains("# MacOS Seatbelt"));
        assert!(!prompt.contains("# Outside of Sandbox"));
    }
}
