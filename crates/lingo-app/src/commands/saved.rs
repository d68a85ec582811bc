use lingo_config::Config;
use lingo_types::WordEntry;

use super::store_client;

pub async fn list(config: &Config) -> anyhow::Result<()> {
    let store = store_client(config)?;
    let saved = store.list_words(&config.store.user_id).await?;

    if saved.is_empty() {
        println!("no saved words");
        return Ok(());
    }

    for row in &saved {
        println!(
            "{:<8} {:<20} {:<12} {}",
            row.id, row.entry.english, row.entry.japanese, row.entry.part_of_speech
        );
    }
    println!("{} of {} words used", saved.len(), config.store.capacity);

    Ok(())
}

pub async fn add(
    config: &Config,
    english: String,
    japanese: String,
    part_of_speech: String,
    example: String,
) -> anyhow::Result<()> {
    let store = store_client(config)?;

    let entry = WordEntry {
        english,
        japanese,
        part_of_speech,
        example,
    };

    let row = store.save_word(&config.store.user_id, &entry).await?;
    println!("saved \"{}\" as #{}", row.entry.english, row.id);

    Ok(())
}

pub async fn remove(config: &Config, id: i64) -> anyhow::Result<()> {
    let store = store_client(config)?;
    store.remove_word(id).await?;
    println!("removed #{id}");

    Ok(())
}
