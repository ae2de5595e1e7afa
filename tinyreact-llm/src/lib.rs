mod config;
mod ollama;

pub use config::{
    ModelConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, ENV_BASE_URL, ENV_MODEL, ENV_TEMPERATURE,
};
pub use ollama::OllamaClient;
pub use tinyreact_core::{CompletionRequest, LanguageModel};
