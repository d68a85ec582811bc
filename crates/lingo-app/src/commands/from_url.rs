use lingo_config::Config;

use super::dify_client;

pub async fn run(config: &Config, url: &str, toeic: u32, words: u32) -> anyhow::Result<()> {
    let client = dify_client(config)?;

    tracing::info!(url, toeic, words, "generating passage from url");
    let passage = client.generate_text_from_url(url, toeic, words).await?;

    println!("{passage}");
    Ok(())
}
