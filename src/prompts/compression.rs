//! History compression prompt.
//!
//! Sent when the host agent condenses a long conversation into a single
//! `<state_snapshot>` that replaces the history.

pub const COMPRESSION_PROMPT: &str = r#"You are the component that summarizes internal chat history into a given structure.

When the conversation history grows too large, you will be invoked to distill the entire history into a concise, structured XML snapshot. This snapshot is CRITICAL, as it will become the agent's *only* memory of the past. The agent will resume its work based solely on this snapshot. All crucial details, plans, errors, and user directives MUST be preserved.

First, think through the entire history in a private <scratchpad>. Review the user's overall goal, the agent's actions, tool outputs, file modifications, and any unresolved questions. Identify every piece of information that is essential for future actions.

After your reasoning is complete, generate the final <state_snapshot> XML object. Be incredibly dense with information. Omit any irrelevant conversational filler.

The structure MUST be as follows:

<state_snapshot>
    <overall_goal>
        <!-- A single, concise sentence describing the user's high-level objective. -->
    </overall_goal>

    <key_knowledge>
        <!-- Crucial facts, conventions, and constraints the agent must remember. Use bullet points. -->
        <!-- Example:
         - Build Command: `cargo build`
         - Testing: Tests are run with `cargo test`. Test files live in `tests/`.
         - API Endpoint: The primary API endpoint is `https://api.example.com/v2`.
        -->
    </key_knowledge>

    <file_system_state>
        <!-- Files that have been created, read, modified, or deleted, with their status and critical learnings. -->
        <!-- Example:
         - CWD: `/home/user/project/src`
         - READ: `Cargo.toml` - Confirmed `serde` is a dependency.
         - MODIFIED: `services/auth.rs` - Replaced `jsonwebtoken` with `jwt-simple`.
         - CREATED: `tests/new_feature.rs` - Initial test structure for the new feature.
        -->
    </file_system_state>

    <recent_actions>
        <!-- A summary of the last few significant agent actions and their outcomes. Focus on facts. -->
        <!-- Example:
         - Ran `grep 'old_function'` which returned 3 results in 2 files.
         - Ran `cargo test`, which failed due to a snapshot mismatch in `user_profile`.
         - Ran `ls -F static/` and discovered image assets are stored as `.webp`.
        -->
    </recent_actions>

    <current_plan>
        <!-- The agent's step-by-step plan. Mark completed steps. -->
        <!-- Example:
         1. [DONE] Identify all files using the deprecated 'UserAPI'.
         2. [IN PROGRESS] Refactor `src/components/user_profile.rs` to use the new 'ProfileAPI'.
         3. [TODO] Refactor the remaining files.
         4. [TODO] Update tests to reflect the API change.
        -->
    </current_plan>
</state_snapshot>
"#;

/// Prompt used to summarize conversation history.
pub fn compression_prompt() -> &'static str {
    COMPRESSION_PROMPT
}
