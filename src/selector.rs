//! Override template selection.
//!
//! Picks the first [`PromptMapping`] whose base URLs and model names both
//! contain the current connection parameters. Base URLs compare equal when they
//! differ only by a single trailing `/`.

use crate::config::{ConnectionParams, PromptMapping};

/// Strips at most one trailing `/`. Nothing else about the URL is touched.
pub fn normalize_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

pub fn urls_match(a: &str, b: &str) -> bool {
    normalize_url(a) == normalize_url(b)
}

/// Returns the template of the first matching mapping, or `None` when the
/// built-in prompt should be used.
///
/// A first match with an empty template also yields `None`; later mappings are
/// not consulted.
pub fn select_override<'a>(
    mappings: Option<&'a [PromptMapping]>,
    params: &ConnectionParams,
) -> Option<&'a str> {
    let mappings = mappings.filter(|m| !m.is_empty())?;
    let (base_url, model_name) = params.as_pair()?;

    let (index, mapping) = mappings
        .iter()
        .enumerate()
        .find(|(_, m)| m.matches(base_url, model_name))?;

    if mapping.template.is_empty() {
        tracing::debug!(index, "Matched mapping has an empty template, using built-in prompt");
        return None;
    }

    tracing::debug!(
        index,
        base_url,
        model_name,
        "Selected system prompt override"
    );
    Some(mapping.template.as_str())
}
