use std::env;

use serde::{Deserialize, Serialize};

fn default_capacity() -> usize {
    200
}

fn default_user_id() -> String {
    "local".to_string()
}

/// Settings for the saved-word store (a PostgREST-style HTTP API).
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    /// Maximum saved words per user, checked client-side before insert
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        let capacity = env::var("MAX_SAVED_WORDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_capacity);

        Self {
            base_url: env::var("STORE_URL").unwrap_or_default(),
            api_key: env::var("STORE_API_KEY").unwrap_or_default(),
            capacity,
            user_id: env::var("STORE_USER_ID").unwrap_or_else(|_| default_user_id()),
        }
    }

    pub fn enabled(&self) -> bool {
        !self.base_url.is_empty() && !self.api_key.is_empty()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            capacity: default_capacity(),
            user_id: default_user_id(),
        }
    }
}
