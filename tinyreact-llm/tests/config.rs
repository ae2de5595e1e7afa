use std::collections::HashMap;

use tinyreact_core::ReactError;
use tinyreact_llm::{ModelConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn unset_variables_fall_back_to_defaults() {
    let config = ModelConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.temperature, 0.0);
}

#[test]
fn variables_override_defaults() {
    let config = ModelConfig::from_lookup(lookup(&[
        ("OLLAMA_MODEL", "llama3.1"),
        ("OLLAMA_BASE_URL", "http://gpu-box:11434"),
        ("OLLAMA_TEMPERATURE", "0.7"),
    ]))
    .expect("config");
    assert_eq!(config.model, "llama3.1");
    assert_eq!(config.base_url, "http://gpu-box:11434");
    assert_eq!(config.temperature, 0.7);
}

#[test]
fn blank_variables_are_ignored() {
    let config = ModelConfig::from_lookup(lookup(&[("OLLAMA_MODEL", "  ")])).expect("config");
    assert_eq!(config.model, DEFAULT_MODEL);
}

#[test]
fn bad_temperature_is_rejected() {
    let err = ModelConfig::from_lookup(lookup(&[("OLLAMA_TEMPERATURE", "warm")])).unwrap_err();
    assert!(matches!(err, ReactError::InvalidConfig(ref msg) if msg.contains("OLLAMA_TEMPERATURE")));

    let err = ModelConfig::from_lookup(lookup(&[("OLLAMA_TEMPERATURE", "-1")])).unwrap_err();
    assert!(matches!(err, ReactError::InvalidConfig(_)));
}

#[test]
fn builder_setters_apply() {
    let config = ModelConfig::new().model("qwen").temperature(0.2);
    assert_eq!(config.model, "qwen");
    assert_eq!(config.temperature, 0.2);
    assert!(config.validate().is_ok());
}
