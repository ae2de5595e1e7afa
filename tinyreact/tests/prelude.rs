use std::sync::Arc;

use tinyreact::prelude::*;

struct Canned;

#[async_trait::async_trait]
impl Runnable<CompletionRequest, String> for Canned {
    async fn invoke(&self, _input: CompletionRequest) -> Result<String, ReactError> {
        Ok("Final Answer: nothing to do".to_string())
    }
}

#[tokio::test]
async fn prelude_covers_a_full_run() {
    let agent = AgentExecutor::builder()
        .llm(Arc::new(Canned))
        .tools(ToolRegistry::new())
        .build()
        .unwrap();

    let run = agent.run("anything?").await.unwrap();
    assert_eq!(run.output, "nothing to do");
    assert_eq!(run.iterations, 1);
    assert!(run.scratchpad.is_empty());
}
