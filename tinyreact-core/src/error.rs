use thiserror::Error;

use crate::ToolError;

#[derive(Debug, Error)]
pub enum ReactError {
    #[error("LLM provider failed: {0}")]
    LlmProvider(String),
    #[error("Tool '{name}' is not registered")]
    ToolNotFound { name: String },
    #[error("Tool '{name}' is already registered")]
    DuplicateTool { name: String },
    #[error("Parsing failed on output '{output}': {reason}")]
    ParseFailed { output: String, reason: String },
    #[error("Tool call failed for '{tool_name}': {source}")]
    ToolExecution {
        tool_name: String,
        #[source]
        source: ToolError,
    },
    #[error("Agent stopped after {max} iterations without a final answer")]
    MaxIterationsExceeded { max: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
