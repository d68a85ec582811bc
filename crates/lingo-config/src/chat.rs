use std::env;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity sent to the chat/workflow service as the `user` field.
///
/// The service only uses it to scope conversations, so a random id per
/// install is enough when none is configured.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ChatConfig {
    #[serde(default)]
    pub user: String,
}

impl ChatConfig {
    pub fn new() -> Self {
        let user = env::var("CHAT_USER").unwrap_or_else(|_| Uuid::new_v4().to_string());

        Self { user }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            user: Uuid::new_v4().to_string(),
        }
    }
}
