use std::path::PathBuf;

use lingo_config::Config;
use lingo_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lingo_types::{GenerateWordsParams, Word};

use super::dify_client;

pub async fn run(
    config: &Config,
    toeic: u32,
    count: usize,
    text: Option<String>,
    file: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let passage = read_passage(text, file)?;
    let passage = DefaultPreprocessor.process(&passage);
    anyhow::ensure!(!passage.is_empty(), "no source text to extract words from");

    let client = dify_client(config)?;
    let params = GenerateWordsParams {
        toeic_level: toeic,
        words: count,
        text: passage,
    };

    let entries = client.generate_word_list(&params).await?;
    let words = Word::from_batch(entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&words)?);
        return Ok(());
    }

    for word in &words {
        println!(
            "{:<20} {:<12} {:<10} {}",
            word.entry.english, word.entry.japanese, word.entry.part_of_speech, word.entry.example
        );
    }
    if words.len() < count {
        println!("({} unique words available)", words.len());
    }

    Ok(())
}

fn read_passage(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()));
    }

    std::io::read_to_string(std::io::stdin()).map_err(Into::into)
}
