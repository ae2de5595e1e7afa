use reqwest::Client;
use serde::{Deserialize, Serialize};

use tinyreact_core::{CompletionRequest, ReactError, Runnable};

use crate::ModelConfig;

/// Chat client for a local Ollama server.
///
/// Each completion is sent as a single user message; stop sequences travel in
/// `options.stop` and are applied again to the returned text. Plain `String`
/// prompts use only the stop sequences from [`ModelConfig`].
#[derive(Clone)]
pub struct OllamaClient {
    config: ModelConfig,
    http: Client,
}

impl OllamaClient {
    pub fn new(config: ModelConfig) -> Result<Self, ReactError> {
        config.validate()?;
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|err| ReactError::LlmProvider(err.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn merge_stop(&self, request: CompletionRequest) -> CompletionRequest {
        let mut stop = self.config.stop.clone();
        for seq in request.stop {
            if !stop.contains(&seq) {
                stop.push(seq);
            }
        }
        CompletionRequest {
            prompt: request.prompt,
            stop,
        }
    }
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage<'a>>,
    stream: bool,
    options: OllamaOptions<'a>,
}

#[derive(Debug, Serialize)]
struct OllamaMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct OllamaOptions<'a> {
    temperature: f32,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    stop: &'a [String],
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

#[async_trait::async_trait]
impl Runnable<CompletionRequest, String> for OllamaClient {
    async fn invoke(&self, input: CompletionRequest) -> Result<String, ReactError> {
        let input = self.merge_stop(input);
        let request = OllamaChatRequest {
            model: &self.config.model,
            messages: vec![OllamaMessage {
                role: "user",
                content: &input.prompt,
            }],
            stream: false,
            options: OllamaOptions {
                temperature: self.config.temperature,
                stop: &input.stop,
            },
        };

        let url = format!("{}/api/chat", self.config.base_url.trim_end_matches('/'));
        tracing::debug!(model = %self.config.model, %url, "sending completion request");
        let response: OllamaChatResponse = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|err| ReactError::LlmProvider(err.to_string()))?
            .error_for_status()
            .map_err(|err| ReactError::LlmProvider(err.to_string()))?
            .json()
            .await
            .map_err(|err| ReactError::LlmProvider(err.to_string()))?;

        Ok(input.truncate_at_stop(&response.message.content).to_string())
    }
}

#[async_trait::async_trait]
impl Runnable<String, String> for OllamaClient {
    async fn invoke(&self, input: String) -> Result<String, ReactError> {
        Runnable::<CompletionRequest, String>::invoke(self, CompletionRequest::new(input)).await
    }
}
