use std::sync::Arc;

use tinyreact_agent::{AgentConfig, AgentExecutor};
use tinyreact_demos::{init_tracing, load_model_config, text_tools, SAMPLE_QUESTION};
use tinyreact_llm::OllamaClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let llm = OllamaClient::new(load_model_config()?)?;
    let agent = AgentExecutor::builder()
        .llm(Arc::new(llm))
        .tools(text_tools()?)
        .config(AgentConfig::default())
        .build()?;

    let run = agent.run(SAMPLE_QUESTION).await?;
    for (step, entry) in run.scratchpad.entries().iter().enumerate() {
        println!(
            "step {}: {}({:?}) -> {}",
            step + 1,
            entry.action.tool,
            entry.action.tool_input,
            entry.observation
        );
    }
    println!("Final answer after {} model calls: {}", run.iterations, run.output);
    Ok(())
}
