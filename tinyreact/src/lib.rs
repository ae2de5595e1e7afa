//! A ReAct agent loop for local models.
//!
//! Register string-in/string-out tools, point the executor at a model, and
//! ask a question:
//!
//! ```no_run
//! use std::sync::Arc;
//! use tinyreact::prelude::*;
//!
//! # async fn demo() -> Result<(), ReactError> {
//! let mut tools = ToolRegistry::new();
//! tools.register(FnTool::new("get_text_length", "Returns the length of the text.", |t: &str| {
//!     Ok::<_, ToolError>(t.trim_matches('\'').chars().count())
//! }))?;
//!
//! let llm = OllamaClient::new(ModelConfig::from_env()?)?;
//! let agent = AgentExecutor::builder().llm(Arc::new(llm)).tools(tools).build()?;
//! let run = agent.run("What is the length of the text 'abc'?").await?;
//! println!("{}", run.output);
//! # Ok(())
//! # }
//! ```

pub use tinyreact_agent as agent;
#[cfg(feature = "ollama")]
pub use tinyreact_llm as llm;
pub use tinyreact_prompt as prompt;

pub mod prelude {
    pub use tinyreact_agent::{
        AgentAction, AgentConfig, AgentExecutor, AgentFinish, AgentRun, AgentStep, FnTool,
        OutputParser, ReActOutputParser, Scratchpad, ScratchpadEntry, ToolRegistry,
    };
    pub use tinyreact_core::{
        CompletionRequest, LanguageModel, ReactError, Runnable, RunnableExt, Tool, ToolError,
        Value,
    };
    #[cfg(feature = "ollama")]
    pub use tinyreact_llm::{ModelConfig, OllamaClient};
    pub use tinyreact_prompt::{react_prompt, PromptTemplate, REACT_TEMPLATE};
}
