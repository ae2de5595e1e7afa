use tinyreact_core::Tool;

use crate::PromptTemplate;

/// The ReAct prompt. The output parser depends on this exact wording.
pub const REACT_TEMPLATE: &str = "Answer the following questions as best you can. You have access to the following tools:

{tools}

Use the following format:

Question: the input question you must answer
Thought: you should always think about what to do
Action: the action to take, should be one of [{tool_names}]
Action Input: the input to the action
Observation: the result of the action
... (this Thought/Action/Action Input/Observation can repeat N times)
Thought: I now know the final answer
Final Answer: the final answer to the original input question

Begin!

Question: {input}
Thought: {agent_scratchpad}";

/// One `name: description` line per tool, in the given order.
pub fn render_text_description<'a, I>(tools: I) -> String
where
    I: IntoIterator<Item = &'a dyn Tool>,
{
    tools
        .into_iter()
        .map(|tool| format!("{}: {}", tool.name(), tool.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_tool_names<'a, I>(tools: I) -> String
where
    I: IntoIterator<Item = &'a dyn Tool>,
{
    tools
        .into_iter()
        .map(|tool| tool.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// [`REACT_TEMPLATE`] with `tools` and `tool_names` already bound, leaving
/// `input` and `agent_scratchpad` for each model call.
pub fn react_prompt(
    descriptions: impl Into<String>,
    tool_names: impl Into<String>,
) -> PromptTemplate {
    PromptTemplate::new(REACT_TEMPLATE)
        .partial("tools", descriptions.into())
        .partial("tool_names", tool_names.into())
}
