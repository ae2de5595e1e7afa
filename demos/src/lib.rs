use tinyreact_agent::{FnTool, ToolError, ToolRegistry};
use tinyreact_core::ReactError;
use tinyreact_llm::ModelConfig;
use tracing_subscriber::EnvFilter;

pub const SAMPLE_QUESTION: &str = "What is the length of the text 'skjdhfsdfhjksdfjkhldsfjklh√±!'?";

/// Character count of `text` once quoting and newlines around it are gone.
pub fn text_length(text: &str) -> usize {
    text.trim_matches(|c: char| c == '\'' || c == '\n')
        .trim_matches('"')
        .chars()
        .count()
}

pub fn get_text_length_tool() -> FnTool {
    FnTool::new(
        "get_text_length",
        "Returns the length of the text.",
        |text: &str| {
            tracing::info!(text, "get_text_length called");
            Ok::<_, ToolError>(text_length(text))
        },
    )
}

pub fn text_tools() -> Result<ToolRegistry, ReactError> {
    let mut tools = ToolRegistry::new();
    tools.register(get_text_length_tool())?;
    Ok(tools)
}

/// Loads `.env` if present, then reads the model settings.
pub fn load_model_config() -> Result<ModelConfig, ReactError> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            tracing::warn!(error = %err, "ignoring unreadable .env file");
        }
    }
    ModelConfig::from_env()
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
