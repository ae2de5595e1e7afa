//! Sends the ReAct prompt once and prints whatever the model writes before
//! its first observation. No tool is executed.

use std::collections::HashMap;

use tinyreact_agent::OBSERVATION_STOP;
use tinyreact_core::{Runnable, RunnableExt, Value};
use tinyreact_demos::{init_tracing, load_model_config, text_tools, SAMPLE_QUESTION};
use tinyreact_llm::OllamaClient;
use tinyreact_prompt::react_prompt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_model_config()?.stop(vec![OBSERVATION_STOP.to_string()]);
    let tools = text_tools()?;
    let prompt = react_prompt(tools.render_descriptions(), tools.render_names());
    let llm = OllamaClient::new(config)?;

    let chain = prompt.then(llm);

    let mut vars = HashMap::new();
    vars.insert("input".to_string(), Value::from(SAMPLE_QUESTION));
    vars.insert("agent_scratchpad".to_string(), Value::from(""));
    let response = chain.invoke(vars).await?;

    println!("{response}");
    Ok(())
}
