use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which a finished agent stores its answer.
pub const OUTPUT_KEY: &str = "output";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentAction {
    pub tool: String,
    pub tool_input: String,
    /// Raw model text that produced this action, replayed in the scratchpad.
    pub log: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentFinish {
    pub return_values: Value,
    pub log: String,
}

impl AgentFinish {
    pub fn new(output: impl Into<String>, log: impl Into<String>) -> Self {
        let mut values = Map::new();
        values.insert(OUTPUT_KEY.to_string(), Value::String(output.into()));
        Self {
            return_values: Value::Object(values),
            log: log.into(),
        }
    }

    pub fn output(&self) -> Option<&str> {
        self.return_values.get(OUTPUT_KEY).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AgentStep {
    Action(AgentAction),
    Finish(AgentFinish),
}
