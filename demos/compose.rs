//! Compose example - print the system prompt for the current directory.
//!
//! Run with: cargo run --example compose -- [user memory]
//!
//! Honors SANDBOX, OPENAI_BASE_URL and OPENAI_MODEL, and reads
//! systemPromptMappings from ~/.agent/settings.json and ./.agent/settings.json.

#[tokio::main]
async fn main() -> Result<(), agent_prompt::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let memory = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let cwd = std::env::current_dir()?;

    let prompt = agent_prompt::system_prompt_for_project(&cwd, Some(&memory)).await?;
    println!("{}", prompt);

    Ok(())
}
