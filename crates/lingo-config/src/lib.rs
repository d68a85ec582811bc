use serde::{Deserialize, Serialize};

use self::chat::ChatConfig;
use self::gemini::GeminiConfig;
use self::store::StoreConfig;
use self::workflow::WorkflowConfig;

pub mod chat;
pub mod gemini;
pub mod store;
pub mod workflow;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub workflow: WorkflowConfig,
    pub gemini: GeminiConfig,
    pub chat: ChatConfig,
    pub store: StoreConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            workflow: WorkflowConfig::new(),
            gemini: GeminiConfig::new(),
            chat: ChatConfig::new(),
            store: StoreConfig::new(),
        }
    }
}
