//! settings.json provider with hierarchical loading.
//!
//! Loads settings from (lowest to highest priority):
//! 1. User settings: ~/.agent/settings.json
//! 2. Project settings: .agent/settings.json
//!
//! A higher-priority file that defines `systemPromptMappings` replaces the
//! whole list from lower-priority files; lists are never concatenated because
//! list order is match precedence.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{ConfigResult, PromptConfig};

/// Directory holding settings files, relative to home or project root.
pub const SETTINGS_DIR: &str = ".agent";
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsSource {
    #[default]
    Builtin,
    User,
    Project,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(skip)]
    pub source: SettingsSource,

    #[serde(flatten)]
    pub prompt: PromptConfig,
}

impl Settings {
    pub fn with_source(mut self, source: SettingsSource) -> Self {
        self.source = source;
        self
    }
}

/// Settings loader that merges from multiple sources.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    settings: Settings,
    user_dir: Option<PathBuf>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `dir` instead of `~/.agent` for user settings.
    pub fn with_user_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_dir = Some(dir.into());
        self
    }

    fn user_settings_path(&self) -> Option<PathBuf> {
        match &self.user_dir {
            Some(dir) => Some(dir.join(SETTINGS_FILE)),
            None => directories::BaseDirs::new()
                .map(|dirs| dirs.home_dir().join(SETTINGS_DIR).join(SETTINGS_FILE)),
        }
    }

    /// Load settings from all sources for a project.
    /// Priority (lowest to highest): User → Project
    pub async fn load(&mut self, project_dir: &Path) -> ConfigResult<&Settings> {
        if let Some(user_settings) = self.user_settings_path()
            && user_settings.exists()
        {
            self.merge_file(&user_settings, SettingsSource::User)
                .await?;
        }

        let project_settings = project_dir.join(SETTINGS_DIR).join(SETTINGS_FILE);
        if project_settings.exists() {
            self.merge_file(&project_settings, SettingsSource::Project)
                .await?;
        }

        Ok(&self.settings)
    }

    async fn merge_file(&mut self, path: &Path, source: SettingsSource) -> ConfigResult<()> {
        let content = tokio::fs::read_to_string(path).await?;
        let file_settings: Settings = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            ?source,
            mappings = file_settings.prompt.mappings().map_or(0, |m| m.len()),
            "Merged settings file"
        );
        self.merge_settings(file_settings.with_source(source));
        Ok(())
    }

    fn merge_settings(&mut self, other: Settings) {
        if other.prompt.system_prompt_mappings.is_some() {
            self.settings.prompt.system_prompt_mappings = other.prompt.system_prompt_mappings;
            self.settings.source = other.source;
        }
    }

    /// Project settings only.
    pub async fn load_from_directory(dir: &Path) -> ConfigResult<Settings> {
        let mut loader = Self::new();
        let settings_path = dir.join(SETTINGS_DIR).join(SETTINGS_FILE);
        if settings_path.exists() {
            loader
                .merge_file(&settings_path, SettingsSource::Project)
                .await?;
        }
        Ok(loader.settings)
    }

    pub async fn load_merged(project_dir: &Path) -> ConfigResult<Settings> {
        let mut loader = Self::new();
        loader.load(project_dir).await?;
        Ok(loader.settings)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
