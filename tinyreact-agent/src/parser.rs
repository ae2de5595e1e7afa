use regex::Regex;
use tinyreact_core::ReactError;

use crate::{AgentAction, AgentFinish, AgentStep};

pub const FINAL_ANSWER_ACTION: &str = "Final Answer:";

const ACTION_PATTERN: &str = r"(?s)Action\s*\d*\s*:[\s]*(.*?)[\s]*Action\s*\d*\s*Input\s*\d*\s*:[\s]*(.*)";
const ACTION_ONLY_PATTERN: &str = r"(?s)Action\s*\d*\s*:[\s]*(.*?)";
const ACTION_INPUT_PATTERN: &str = r"(?s)[\s]*Action\s*\d*\s*Input\s*\d*\s*:[\s]*(.*)";

/// Turns raw model text into the next [`AgentStep`].
///
/// Any `Fn(&str) -> Result<AgentStep, ReactError>` is a parser.
pub trait OutputParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<AgentStep, ReactError>;
}

impl<F> OutputParser for F
where
    F: Fn(&str) -> Result<AgentStep, ReactError> + Send + Sync,
{
    fn parse(&self, text: &str) -> Result<AgentStep, ReactError> {
        self(text)
    }
}

/// Parses the `Action:` / `Action Input:` / `Final Answer:` text format.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReActOutputParser;

impl ReActOutputParser {
    pub fn new() -> Self {
        Self
    }
}

impl OutputParser for ReActOutputParser {
    fn parse(&self, text: &str) -> Result<AgentStep, ReactError> {
        let includes_answer = text.contains(FINAL_ANSWER_ACTION);

        if let Some(caps) = compile(ACTION_PATTERN)?.captures(text) {
            if includes_answer {
                return Err(parse_failed(
                    text,
                    "output contains both a final answer and a parse-able action",
                ));
            }
            let tool = caps.get(1).map_or("", |m| m.as_str()).trim();
            let raw_input = caps.get(2).map_or("", |m| m.as_str());
            return Ok(AgentStep::Action(AgentAction {
                tool: tool.to_string(),
                tool_input: normalize_input(raw_input).to_string(),
                log: text.to_string(),
            }));
        }

        if includes_answer {
            let answer = text
                .rsplit(FINAL_ANSWER_ACTION)
                .next()
                .unwrap_or_default()
                .trim();
            return Ok(AgentStep::Finish(AgentFinish::new(answer, text)));
        }

        if !compile(ACTION_ONLY_PATTERN)?.is_match(text) {
            Err(parse_failed(text, "missing 'Action:' after 'Thought:'"))
        } else if !compile(ACTION_INPUT_PATTERN)?.is_match(text) {
            Err(parse_failed(text, "missing 'Action Input:' after 'Action:'"))
        } else {
            Err(parse_failed(text, "could not parse model output"))
        }
    }
}

/// Strips surrounding whitespace, then any surrounding quotes.
fn normalize_input(raw: &str) -> &str {
    raw.trim().trim_matches(|c: char| c == '"' || c == '\'')
}

fn compile(pattern: &str) -> Result<Regex, ReactError> {
    Regex::new(pattern).map_err(|e| ReactError::InvalidConfig(e.to_string()))
}

fn parse_failed(text: &str, reason: &str) -> ReactError {
    ReactError::ParseFailed {
        output: text.to_string(),
        reason: reason.to_string(),
    }
}
