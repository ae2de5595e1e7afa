use std::collections::HashMap;
use std::sync::Arc;

use tinyreact_core::{ReactError, Tool, Value};
use tinyreact_prompt::{render_text_description, render_tool_names};

/// Tools addressable by name, kept in registration order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T>(&mut self, tool: T) -> Result<(), ReactError>
    where
        T: Tool + 'static,
    {
        self.register_shared(Arc::new(tool))
    }

    pub fn register_shared(&mut self, tool: Arc<dyn Tool>) -> Result<(), ReactError> {
        let name = tool.name().to_string();
        if name.trim().is_empty() {
            return Err(ReactError::InvalidConfig(format!(
                "tool name must not be empty or whitespace: {name:?}"
            )));
        }
        if self.index.contains_key(&name) {
            return Err(ReactError::DuplicateTool { name });
        }
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Result<&dyn Tool, ReactError> {
        match self.index.get(name) {
            Some(&idx) => Ok(self.tools[idx].as_ref()),
            None => Err(ReactError::ToolNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Looks the tool up and runs it. Tool failures keep the tool's own error
    /// as the source of [`ReactError::ToolExecution`].
    pub async fn call(&self, name: &str, input: &str) -> Result<Value, ReactError> {
        let tool = self.find(name)?;
        tool.invoke(input)
            .await
            .map_err(|source| ReactError::ToolExecution {
                tool_name: name.to_string(),
                source,
            })
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// `name: description` per line, in registration order.
    pub fn render_descriptions(&self) -> String {
        render_text_description(self.iter())
    }

    /// Tool names joined with `", "`, in registration order.
    pub fn render_names(&self) -> String {
        render_tool_names(self.iter())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = &dyn Tool> {
        self.tools.iter().map(|tool| tool.as_ref())
    }
}
