use lingo_config::Config;
use lingo_gemini::generate_reading_text;

use super::gemini_client;

pub async fn run(config: &Config, toeic: u32, words: u32, theme: &str) -> anyhow::Result<()> {
    let client = gemini_client(config)?;

    tracing::info!(toeic, words, theme, "generating passage");
    let passage = generate_reading_text(&client, toeic, words, theme).await?;

    println!("{passage}");
    Ok(())
}
