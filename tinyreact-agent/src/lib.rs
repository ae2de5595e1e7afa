mod action;
mod config;
mod executor;
mod fn_tool;
mod parser;
mod registry;
mod scratchpad;

pub use action::{AgentAction, AgentFinish, AgentStep, OUTPUT_KEY};
pub use config::{AgentConfig, DEFAULT_MAX_ITERATIONS, OBSERVATION_STOP};
pub use executor::{AgentExecutor, AgentRun};
pub use fn_tool::FnTool;
pub use parser::{OutputParser, ReActOutputParser, FINAL_ANSWER_ACTION};
pub use registry::ToolRegistry;
pub use scratchpad::{Scratchpad, ScratchpadEntry, OBSERVATION_PREFIX, THOUGHT_PREFIX};

pub use tinyreact_core::{Tool, ToolError};
