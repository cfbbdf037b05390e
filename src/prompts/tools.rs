//! Tool names referenced by the instructional text.
//!
//! The tools themselves live in the host agent; prompts only need their names.

pub const LIST_DIRECTORY: &str = "list_directory";
pub const READ_FILE: &str = "read_file";
pub const READ_MANY_FILES: &str = "read_many_files";
pub const WRITE_FILE: &str = "write_file";
pub const EDIT: &str = "replace";
pub const GLOB: &str = "glob";
pub const GREP: &str = "search_file_content";
pub const SHELL: &str = "run_shell_command";
pub const MEMORY: &str = "save_memory";

/// `{PLACEHOLDER}` → tool name pairs understood by [`fill_tool_names`].
const PLACEHOLDERS: &[(&str, &str)] = &[
    ("{LIST_DIRECTORY}", LIST_DIRECTORY),
    ("{READ_FILE}", READ_FILE),
    ("{READ_MANY_FILES}", READ_MANY_FILES),
    ("{WRITE_FILE}", WRITE_FILE),
    ("{EDIT}", EDIT),
    ("{GLOB}", GLOB),
    ("{GREP}", GREP),
    ("{SHELL}", SHELL),
    ("{MEMORY}", MEMORY),
];

/// Substitutes tool-name placeholders in built-in text.
///
/// Only used for the crate's own templates; override templates are never rewritten.
pub(crate) fn fill_tool_names(template: &str) -> String {
    PLACEHOLDERS
        .iter()
        .fold(template.to_string(), |text, (placeholder, name)| {
            text.replace(placeholder, name)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_tool_names() {
        let text = fill_tool_names("Use '{READ_FILE}' then '{EDIT}', not '{SHELL}'.");
        assert_eq!(
            text,
            "Use 'read_file' then 'replace', not 'run_shell_command'."
        );
    }

    #[test]
    fn test_unknown_placeholder_untouched() {
        assert_eq!(fill_tool_names("{UNKNOWN}"), "{UNKNOWN}");
    }
}
