use std::env;

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gemini-pro".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| default_model()),
        }
    }

    pub fn enabled(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
        }
    }
}
