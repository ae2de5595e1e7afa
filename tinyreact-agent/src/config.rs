use tinyreact_core::ReactError;

pub const DEFAULT_MAX_ITERATIONS: usize = 15;

/// Stops generation before the model writes its own observation.
pub const OBSERVATION_STOP: &str = "\nObservation";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentConfig {
    pub max_iterations: usize,
    pub stop: Vec<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stop: vec![OBSERVATION_STOP.to_string()],
        }
    }
}

impl AgentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = value;
        self
    }

    pub fn stop(mut self, value: Vec<String>) -> Self {
        self.stop = value;
        self
    }

    pub fn validate(&self) -> Result<(), ReactError> {
        if self.max_iterations == 0 {
            return Err(ReactError::InvalidConfig(
                "max_iterations must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
