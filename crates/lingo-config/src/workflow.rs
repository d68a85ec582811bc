use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.dify.ai/v1".to_string()
}

/// Connection settings for the vocabulary-extraction workflow service.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WorkflowConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl WorkflowConfig {
    pub fn new() -> Self {
        Self {
            base_url: env::var("DIFY_API_URL").unwrap_or_else(|_| default_base_url()),
            api_key: env::var("DIFY_API_KEY").unwrap_or_default(),
        }
    }

    pub fn enabled(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_public_endpoint() {
        let config: WorkflowConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "https://api.dify.ai/v1");
        assert!(!config.enabled());
    }
}
