mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    let mut config = parse(&config_str)?;

    if let Ok(api_key) = env::var("LLM_API_KEY") {
        config.llm.api_key = api_key;
    }

    validate(&config)?;
    Ok(config)
}

pub fn parse(config_str: &str) -> Result<Config> {
    Ok(serde_yaml::from_str(config_str)?)
}

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(
            "llm.api_key is empty; set it in the config file or LLM_API_KEY",
        ));
    }
    if config.llm.model.trim().is_empty() {
        return Err(Error::config("llm.model is empty"));
    }
    if config.llm.timeout_secs == 0 {
        return Err(Error::config("llm.timeout_secs must be greater than zero"));
    }
    Ok(())
}
