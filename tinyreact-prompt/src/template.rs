use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use regex::Regex;
use tinyreact_core::{ReactError, Runnable, Value};

/// A text template with `{name}` placeholders.
///
/// `{{` and `}}` render as literal braces. Every placeholder must be bound,
/// either through [`PromptTemplate::partial`] or at render time.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    partials: HashMap<String, Value>,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            partials: HashMap::new(),
        }
    }

    /// Binds a variable once so later renders no longer need to supply it.
    pub fn partial(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.partials.insert(key.into(), value.into());
        self
    }

    /// Variables still required at render time, sorted by name.
    pub fn input_variables(&self) -> Result<Vec<String>, ReactError> {
        let pattern = placeholder_pattern()?;
        let names: BTreeSet<String> = pattern
            .captures_iter(&self.template)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .filter(|name| !self.partials.contains_key(name))
            .collect();
        Ok(names.into_iter().collect())
    }

    pub fn render(&self, vars: &HashMap<String, Value>) -> Result<String, ReactError> {
        let pattern = placeholder_pattern()?;
        let mut missing = None;
        let rendered = pattern.replace_all(&self.template, |caps: &regex::Captures| {
            let Some(key) = caps.get(1) else {
                // escaped brace
                return caps[0][..1].to_string();
            };
            match vars.get(key.as_str()).or_else(|| self.partials.get(key.as_str())) {
                Some(value) => value
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| value.to_string()),
                None => {
                    missing.get_or_insert_with(|| key.as_str().to_string());
                    String::new()
                }
            }
        });
        if let Some(key) = missing {
            return Err(ReactError::InvalidConfig(format!(
                "missing prompt variable '{key}'"
            )));
        }
        Ok(rendered.into_owned())
    }
}

fn placeholder_pattern() -> Result<Regex, ReactError> {
    Regex::new(r"\{\{|\}\}|\{(\w+)\}").map_err(|e| ReactError::InvalidConfig(e.to_string()))
}

#[async_trait]
impl Runnable<HashMap<String, Value>, String> for PromptTemplate {
    async fn invoke(&self, input: HashMap<String, Value>) -> Result<String, ReactError> {
        self.render(&input)
    }
}
