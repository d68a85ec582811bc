use lingo_config::Config;
use lingo_dify::DifyClient;
use lingo_gemini::GeminiClient;
use lingo_store::WordStoreClient;

pub mod chat;
pub mod from_url;
pub mod quiz;
pub mod saved;
pub mod text;
pub mod translate;
pub mod words;

/// Build the workflow/chat client, or explain what is missing.
pub fn dify_client(config: &Config) -> anyhow::Result<DifyClient> {
    anyhow::ensure!(
        config.workflow.enabled(),
        "the workflow service is not configured; set DIFY_API_KEY"
    );

    Ok(DifyClient::new(
        config.workflow.base_url.clone(),
        config.workflow.api_key.clone(),
        config.chat.user.clone(),
    ))
}

pub fn gemini_client(config: &Config) -> anyhow::Result<GeminiClient> {
    anyhow::ensure!(
        config.gemini.enabled(),
        "Gemini is not configured; set GEMINI_API_KEY"
    );

    Ok(GeminiClient::new(
        config.gemini.api_key.clone(),
        config.gemini.model.clone(),
    ))
}

pub fn store_client(config: &Config) -> anyhow::Result<WordStoreClient> {
    anyhow::ensure!(
        config.store.enabled(),
        "the word store is not configured; set STORE_URL and STORE_API_KEY"
    );

    Ok(WordStoreClient::new(
        config.store.base_url.clone(),
        config.store.api_key.clone(),
        config.store.capacity,
    ))
}
