use serde::Serialize;
use tinyreact_core::{Tool, ToolError, Value};

type ToolFn = dyn Fn(&str) -> Result<Value, ToolError> + Send + Sync;

/// A tool backed by a plain closure.
///
/// ```
/// use tinyreact_agent::{FnTool, ToolError};
///
/// let tool = FnTool::new("shout", "Upper-cases the text.", |text: &str| {
///     Ok::<_, ToolError>(text.to_uppercase())
/// });
/// ```
pub struct FnTool {
    name: String,
    description: String,
    func: Box<ToolFn>,
}

impl FnTool {
    pub fn new<F, R>(name: impl Into<String>, description: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> Result<R, ToolError> + Send + Sync + 'static,
        R: Serialize,
    {
        Self {
            name: name.into(),
            description: description.into(),
            func: Box::new(move |input: &str| -> Result<Value, ToolError> {
                Ok(serde_json::to_value(func(input)?)?)
            }),
        }
    }
}

impl std::fmt::Debug for FnTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

#[async_trait::async_trait]
impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn invoke(&self, input: &str) -> Result<Value, ToolError> {
        (self.func)(input)
    }
}
