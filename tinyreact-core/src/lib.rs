mod chain;
mod error;
mod llm;
mod runnable;
mod tool;
mod value;

pub use chain::{Chain, RunnableExt};
pub use error::ReactError;
pub use llm::{CompletionRequest, LanguageModel};
pub use runnable::Runnable;
pub use tool::{stringify_output, Tool, ToolError};
pub use value::Value;
