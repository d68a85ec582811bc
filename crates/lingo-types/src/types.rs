use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// One vocabulary entry as produced by the extraction workflow.
///
/// `english` is the headword and acts as the deduplication key within a
/// generation batch. The upstream payload spells the part-of-speech field
/// in camelCase; `part_of_speech` and `example` tolerate being absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub english: String,
    pub japanese: String,
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub example: String,
}

/// A word with an identifier: client-generated for transient lists,
/// server-assigned for persisted rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    #[serde(flatten)]
    pub entry: WordEntry,
}

impl Word {
    /// Assign time-based ids (epoch millis + index) to a generated batch.
    pub fn from_batch(entries: Vec<WordEntry>) -> Vec<Word> {
        let base = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64;

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Word {
                id: base + index as i64,
                entry,
            })
            .collect()
    }
}

/// Input for one word-list generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateWordsParams {
    pub toeic_level: u32,
    pub words: usize,
    pub text: String,
}

/// A word persisted for a user by the word store service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedWord {
    pub id: i64,
    pub user_id: String,
    /// ISO-8601 timestamp as returned by the store.
    pub created_at: String,
    #[serde(flatten)]
    pub entry: WordEntry,
}
