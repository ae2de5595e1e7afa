use tinyreact_core::ReactError;

pub const ENV_MODEL: &str = "OLLAMA_MODEL";
pub const ENV_BASE_URL: &str = "OLLAMA_BASE_URL";
pub const ENV_TEMPERATURE: &str = "OLLAMA_TEMPERATURE";

pub const DEFAULT_MODEL: &str = "mistral";
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Which model to talk to and how to sample from it.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelConfig {
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    /// Stop sequences applied to every completion, in addition to any the
    /// request carries.
    pub stop: Vec<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.0,
            stop: Vec::new(),
        }
    }
}

impl ModelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `OLLAMA_MODEL`, `OLLAMA_BASE_URL` and `OLLAMA_TEMPERATURE` from
    /// the process environment, keeping defaults for unset variables.
    pub fn from_env() -> Result<Self, ReactError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReactError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(model) = non_empty(lookup(ENV_MODEL)) {
            config.model = model;
        }
        if let Some(base_url) = non_empty(lookup(ENV_BASE_URL)) {
            config.base_url = base_url;
        }
        if let Some(raw) = non_empty(lookup(ENV_TEMPERATURE)) {
            config.temperature = raw.parse().map_err(|_| {
                ReactError::InvalidConfig(format!("{ENV_TEMPERATURE} is not a number: {raw}"))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn model(mut self, value: impl Into<String>) -> Self {
        self.model = value.into();
        self
    }

    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.base_url = value.into();
        self
    }

    pub fn temperature(mut self, value: f32) -> Self {
        self.temperature = value;
        self
    }

    pub fn stop(mut self, value: Vec<String>) -> Self {
        self.stop = value;
        self
    }

    pub fn validate(&self) -> Result<(), ReactError> {
        if self.model.trim().is_empty() {
            return Err(ReactError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(ReactError::InvalidConfig(
                "base_url must not be empty".to_string(),
            ));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(ReactError::InvalidConfig(format!(
                "temperature must be a non-negative number, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
