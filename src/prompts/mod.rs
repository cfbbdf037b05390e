//! Built-in prompt text.
//!
//! Structure:
//! - `base`: Core instructions (used unless an override template matches)
//! - `sections`: Sandbox and git sections selected from the environment
//! - `compression`: History summarization prompt
//! - `tools`: Tool names referenced by the text

pub mod base;
pub mod compression;
pub mod sections;
pub mod tools;

pub use base::{AGENT_IDENTITY, base_prompt, final_reminder};
pub use compression::{COMPRESSION_PROMPT, compression_prompt};
pub use sections::{
    GENERIC_SANDBOX_SECTION, OUTSIDE_SANDBOX_SECTION, SEATBELT_SANDBOX_SECTION, git_section,
    sandbox_section,
};
