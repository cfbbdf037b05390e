//! Connection-keyed system prompt overrides.

use serde::{Deserialize, Serialize};

use super::ConfigResult;
use crate::selector::urls_match;

/// A template that replaces the built-in prompt body for specific endpoints and models.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMapping {
    #[serde(default, rename = "baseUrls")]
    pub base_urls: Vec<String>,

    #[serde(default, rename = "modelNames")]
    pub model_names: Vec<String>,

    #[serde(default)]
    pub template: String,
}

impl PromptMapping {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_urls.push(url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_names.push(model.into());
        self
    }

    /// Both the base URL (ignoring one trailing `/`) and the model name (exact)
    /// must be listed.
    pub fn matches(&self, base_url: &str, model_name: &str) -> bool {
        self.base_urls.iter().any(|u| urls_match(u, base_url))
            && self.model_names.iter().any(|m| m == model_name)
    }
}

/// Caller-supplied override configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(
        default,
        rename = "systemPromptMappings",
        skip_serializing_if = "Option::is_none"
    )]
    pub system_prompt_mappings: Option<Vec<PromptMapping>>,
}

impl PromptConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapping(mut self, mapping: PromptMapping) -> Self {
        self.system_prompt_mappings
            .get_or_insert_with(Vec::new)
            .push(mapping);
        self
    }

    pub fn mappings(&self) -> Option<&[PromptMapping]> {
        self.system_prompt_mappings.as_deref()
    }

    /// Parses a settings document. Keys other than `systemPromptMappings` are ignored.
    ///
    /// Template content is not inspected; an empty template is kept and simply
    /// never selected.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use serde_json::json;

    #[test]
    fn test_mapping_requires_both_fields() {
        let mapping = PromptMapping::new("T1")
            .with_base_url("https://api.example.com")
            .with_model("gpt-4");

        assert!(mapping.matches("https://api.example.com", "gpt-4"));
        assert!(mapping.matches("https://api.example.com/", "gpt-4"));
        assert!(!mapping.matches("https://api.example.com", "gpt-3.5-turbo"));
        assert!(!mapping.matches("https://api.other.com", "gpt-4"));
    }

    #[test]
    fn test_mapping_without_models_never_matches() {
        let mapping = PromptMapping::new("T1").with_base_url("https://api.example.com");
        assert!(!mapping.matches("https://api.example.com", "gpt-4"));
    }

    #[test]
    fn test_model_name_is_exact() {
        let mapping = PromptMapping::new("T1")
            .with_base_url("https://api.example.com")
            .with_model("gpt-4");
        assert!(!mapping.matches("https://api.example.com", "GPT-4"));
        assert!(!mapping.matches("https://api.example.com", "gpt-4 "));
    }

    #[test]
    fn test_deserialize_settings_document() {
        let doc = json!({
            "theme": "dark",
            "systemPromptMappings": [
                {
                    "baseUrls": ["https://api.example.com"],
                    "modelNames": ["gpt-4"],
                    "template": "Custom template"
                }
            ]
        });

        let config = PromptConfig::from_json_str(&doc.to_string()).unwrap();
        let mappings = config.mappings().unwrap();
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings[0].base_urls, vec!["https://api.example.com"]);
        assert_eq!(mappings[0].model_names, vec!["gpt-4"]);
        assert_eq!(mappings[0].template, "Custom template");
    }

    #[test]
    fn test_missing_mappings_is_none() {
        let config = PromptConfig::from_json_str("{}").unwrap();
        assert!(config.mappings().is_none());
    }

    #[test]
    fn test_empty_template_accepted() {
        let doc = json!({
            "systemPromptMappings": [
                { "baseUrls": ["https://a"], "modelNames": ["m"], "template": "ok" },
                { "baseUrls": ["https://b"], "modelNames": ["m"], "template": "" },
                { "baseUrls": ["https://c"], "modelNames": ["m"] }
            ]
        });

        let config = PromptConfig::from_json_str(&doc.to_string()).unwrap();
        let templates: Vec<_> = config
            .mappings()
            .unwrap()
            .iter()
            .map(|m| m.template.as_str())
            .collect();
        assert_eq!(templates, vec!["ok", "", ""]);
    }

    #[test]
    fn test_invalid_json() {
        let err = PromptConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Serialization(_)));
    }

    #[test]
    fn test_with_mapping_preserves_order() {
        let config = PromptConfig::new()
            .with_mapping(PromptMapping::new("first"))
            .with_mapping(PromptMapping::new("second"));

        let templates: Vec<_> = config
            .mappings()
            .unwrap()
            .iter()
            .map(|m| m.template.as_str())
            .collect();
        assert_eq!(templates, vec!["first", "second"]);
    }
}
