use lingo_config::Config;
use lingo_gemini::GeminiTranslator;
use lingo_translator::Translator;

use super::gemini_client;

pub async fn run(config: &Config, text: &str, from: String, to: String) -> anyhow::Result<()> {
    let translator = GeminiTranslator::new(gemini_client(config)?);

    let translation = translator.translate(text, from, to).await?;
    tracing::debug!(provider = %translation.provider, "translation done");

    println!("{}", translation.text);
    Ok(())
}
