use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tinyreact_core::{
    stringify_output, CompletionRequest, LanguageModel, ReactError, Runnable, Value,
};
use tinyreact_prompt::{react_prompt, PromptTemplate};
use tracing::Instrument;

use crate::{
    AgentAction, AgentConfig, AgentStep, OutputParser, ReActOutputParser, Scratchpad,
    ScratchpadEntry, ToolRegistry,
};

const PROMPT_VARIABLES: [&str; 2] = ["input", "agent_scratchpad"];

/// Outcome of a session that reached a final answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentRun {
    pub output: String,
    pub return_values: Value,
    pub scratchpad: Scratchpad,
    /// Number of model invocations, including the one that finished.
    pub iterations: usize,
}

/// Drives the ReAct loop: prompt, model, parse, dispatch, observe.
pub struct AgentExecutor {
    llm: Arc<dyn LanguageModel>,
    tools: ToolRegistry,
    parser: Box<dyn OutputParser>,
    prompt: PromptTemplate,
    config: AgentConfig,
}

pub struct AgentExecutorBuilder {
    llm: Option<Arc<dyn LanguageModel>>,
    tools: ToolRegistry,
    parser: Option<Box<dyn OutputParser>>,
    prompt: Option<PromptTemplate>,
    config: AgentConfig,
}

impl AgentExecutor {
    pub fn builder() -> AgentExecutorBuilder {
        AgentExecutorBuilder {
            llm: None,
            tools: ToolRegistry::new(),
            parser: None,
            prompt: None,
            config: AgentConfig::default(),
        }
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn render_prompt(
        &self,
        question: &str,
        scratchpad: &Scratchpad,
    ) -> Result<String, ReactError> {
        let mut vars = HashMap::new();
        vars.insert("input".to_string(), Value::from(question));
        vars.insert("agent_scratchpad".to_string(), Value::from(scratchpad.format()));
        self.prompt.render(&vars)
    }

    /// One model call: renders the prompt for the current scratchpad and
    /// parses the reply into the next step.
    pub async fn plan(
        &self,
        question: &str,
        scratchpad: &Scratchpad,
    ) -> Result<AgentStep, ReactError> {
        let prompt = self.render_prompt(question, scratchpad)?;
        let request = CompletionRequest::new(prompt).with_stop(self.config.stop.clone());
        let text = self.llm.invoke(request).await?;
        tracing::debug!(response = %text, "model replied");
        self.parser.parse(&text)
    }

    /// Runs the tool named by `action` and pairs the action with its
    /// stringified result.
    pub async fn execute(&self, action: &AgentAction) -> Result<ScratchpadEntry, ReactError> {
        tracing::info!(tool = %action.tool, input = %action.tool_input, "dispatching tool");
        let output = self.tools.call(&action.tool, &action.tool_input).await?;
        let observation = stringify_output(&output);
        tracing::debug!(tool = %action.tool, %observation, "tool returned");
        Ok(ScratchpadEntry {
            action: action.clone(),
            observation,
        })
    }

    /// Loops until the model gives a final answer.
    ///
    /// Parse failures, unknown tools and tool errors end the session
    /// immediately, as does reaching `max_iterations` model calls without an
    /// answer.
    pub async fn run(&self, question: &str) -> Result<AgentRun, ReactError> {
        let span = tracing::info_span!("agent_run", max_iterations = self.config.max_iterations);
        self.run_loop(question).instrument(span).await
    }

    async fn run_loop(&self, question: &str) -> Result<AgentRun, ReactError> {
        let mut scratchpad = Scratchpad::new();
        let mut iterations = 0;

        let finish = loop {
            if iterations == self.config.max_iterations {
                tracing::warn!(iterations, "no final answer within the iteration budget");
                return Err(ReactError::MaxIterationsExceeded {
                    max: self.config.max_iterations,
                });
            }
            iterations += 1;
            tracing::debug!(iteration = iterations, "invoking model");

            match self.plan(question, &scratchpad).await? {
                AgentStep::Action(action) => {
                    let entry = self.execute(&action).await?;
                    scratchpad.push(entry);
                }
                AgentStep::Finish(finish) => break finish,
            }
        };

        let output = finish
            .output()
            .map(str::to_string)
            .unwrap_or_else(|| stringify_output(&finish.return_values));
        tracing::info!(iterations, %output, "agent finished");
        Ok(AgentRun {
            output,
            return_values: finish.return_values,
            scratchpad,
            iterations,
        })
    }
}

impl AgentExecutorBuilder {
    pub fn llm(mut self, llm: Arc<dyn LanguageModel>) -> Self {
        self.llm = Some(llm);
        self
    }

    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    pub fn parser(mut self, parser: impl OutputParser + 'static) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Replaces the default ReAct prompt. The template must accept `input`
    /// and `agent_scratchpad`.
    pub fn prompt(mut self, prompt: PromptTemplate) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<AgentExecutor, ReactError> {
        let llm = self
            .llm
            .ok_or_else(|| ReactError::InvalidConfig("llm is required".to_string()))?;
        self.config.validate()?;

        let prompt = match self.prompt {
            Some(prompt) => {
                let variables = prompt.input_variables()?;
                for required in PROMPT_VARIABLES {
                    if !variables.iter().any(|name| name == required) {
                        return Err(ReactError::InvalidConfig(format!(
                            "prompt is missing the '{required}' variable"
                        )));
                    }
                }
                prompt
            }
            None => react_prompt(self.tools.render_descriptions(), self.tools.render_names()),
        };

        Ok(AgentExecutor {
            llm,
            tools: self.tools,
            parser: self.parser.unwrap_or_else(|| {
                Box::new(ReActOutputParser::new()) as Box<dyn OutputParser>
            }),
            prompt,
            config: self.config,
        })
    }
}

#[async_trait::async_trait]
impl Runnable<String, String> for AgentExecutor {
    async fn invoke(&self, input: String) -> Result<String, ReactError> {
        Ok(self.run(&input).await?.output)
    }
}
