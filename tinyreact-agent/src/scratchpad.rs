use serde::{Deserialize, Serialize};
use tinyreact_core::ReactError;

use crate::{AgentAction, AgentStep, OutputParser, ReActOutputParser};

pub const OBSERVATION_PREFIX: &str = "Observation: ";
pub const THOUGHT_PREFIX: &str = "Thought: ";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScratchpadEntry {
    pub action: AgentAction,
    pub observation: String,
}

/// Ordered record of executed actions and what they returned.
///
/// Append-only: entries are never rewritten once pushed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Scratchpad {
    entries: Vec<ScratchpadEntry>,
}

impl Scratchpad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ScratchpadEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ScratchpadEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the transcript fed back to the model after `Thought:`.
    ///
    /// Each entry becomes `{log}\nObservation: {observation}\nThought: `.
    pub fn format(&self) -> String {
        let mut thoughts = String::new();
        for entry in &self.entries {
            thoughts.push_str(&entry.action.log);
            thoughts.push('\n');
            thoughts.push_str(OBSERVATION_PREFIX);
            thoughts.push_str(&entry.observation);
            thoughts.push('\n');
            thoughts.push_str(THOUGHT_PREFIX);
        }
        thoughts
    }

    /// Reads back text produced by [`Scratchpad::format`].
    ///
    /// Logs must not contain `"\nObservation: "` and observations must not
    /// contain `"\nThought: "`, otherwise entry boundaries are ambiguous.
    pub fn parse_log(text: &str) -> Result<Self, ReactError> {
        let observation_marker = format!("\n{OBSERVATION_PREFIX}");
        let thought_marker = format!("\n{THOUGHT_PREFIX}");
        let parser = ReActOutputParser::new();

        let mut scratchpad = Self::new();
        let mut rest = text;
        while !rest.is_empty() {
            let Some(obs_at) = rest.find(&observation_marker) else {
                return Err(malformed(rest, "entry has no observation"));
            };
            let log = &rest[..obs_at];
            let after = &rest[obs_at + observation_marker.len()..];
            let Some(end) = after.find(&thought_marker) else {
                return Err(malformed(rest, "observation is not followed by a thought cue"));
            };

            let action = match parser.parse(log)? {
                AgentStep::Action(action) => action,
                AgentStep::Finish(_) => {
                    return Err(malformed(log, "final answer cannot carry an observation"))
                }
            };
            scratchpad.push(ScratchpadEntry {
                action,
                observation: after[..end].to_string(),
            });
            rest = &after[end + thought_marker.len()..];
        }
        Ok(scratchpad)
    }
}

fn malformed(text: &str, reason: &str) -> ReactError {
    ReactError::ParseFailed {
        output: text.to_string(),
        reason: reason.to_string(),
    }
}
