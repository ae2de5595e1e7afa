use async_trait::async_trait;

use crate::ReactError;

/// A single step that turns an input into an output, possibly asynchronously.
///
/// Prompt templates, model clients and whole agents all implement this, so
/// they compose with [`RunnableExt::then`](crate::RunnableExt::then).
#[async_trait]
pub trait Runnable<Input: Send + 'static, Output: Send + 'static> {
    async fn invoke(&self, input: Input) -> Result<Output, ReactError>;
}
