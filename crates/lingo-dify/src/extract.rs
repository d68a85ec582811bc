//! Recovery of word entries from the workflow's noisy payload.
//!
//! The workflow answers with JSON chunks whose `data.outputs.words` field
//! holds a *string-encoded* JSON array, usually wrapped in a markdown code
//! fence and sprinkled with escaped control characters. The upstream shape
//! is informally stable at best, so extraction is an ordered cleanup
//! pipeline followed by one strict parse; anything that still does not
//! parse makes the whole chunk unusable.

use std::collections::HashMap;

use lingo_types::WordEntry;

/// Pull the word array out of one workflow chunk, if this chunk carries it.
///
/// Returns `None` for chunks that are not JSON, lack the `words` field, or
/// whose payload does not survive [`parse_word_array`]. Callers treat that
/// as "keep reading" since a partial stream looks exactly the same.
pub fn scan_chunk(chunk: &[u8]) -> Option<Vec<WordEntry>> {
    let text = String::from_utf8_lossy(chunk);
    tracing::debug!(len = text.len(), "scanning workflow chunk");

    let value: serde_json::Value = serde_json::from_str(&text).ok()?;
    let raw = value.pointer("/data/outputs/words")?.as_str()?;

    match parse_word_array(raw) {
        Ok(entries) => Some(entries),
        Err(error) => {
            tracing::debug!(%error, "chunk carried an unparseable word payload");
            None
        }
    }
}

/// Parse the string-encoded word array after cleanup.
pub fn parse_word_array(raw: &str) -> Result<Vec<WordEntry>, serde_json::Error> {
    let cleaned = clean_payload(raw);
    serde_json::from_str(&format!("[{cleaned}]"))
}

/// The cleanup steps, in an order that matters: newlines first so fence
/// markers fuse into the exact forms stripped next, backslashes before the
/// final bracket trim.
fn clean_payload(raw: &str) -> String {
    let unescaped = raw
        .replace('\n', "")
        .replace("\\n", "")
        .replace('\\', "");

    let unfenced = unescaped.replace("```json[", "").replace("]```", "");

    let trimmed = unfenced.trim();
    let trimmed = trimmed.strip_prefix('[').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(']').unwrap_or(trimmed);

    trimmed.to_string()
}

/// Collapse entries sharing the same `english` headword.
///
/// Last-seen entry wins; output order follows each headword's first
/// appearance. Running it twice changes nothing.
pub fn dedup_by_headword(entries: Vec<WordEntry>) -> Vec<WordEntry> {
    let mut order: Vec<String> = Vec::new();
    let mut by_headword: HashMap<String, WordEntry> = HashMap::new();

    for entry in entries {
        if !by_headword.contains_key(&entry.english) {
            order.push(entry.english.clone());
        }
        by_headword.insert(entry.english.clone(), entry);
    }

    order
        .into_iter()
        .filter_map(|headword| by_headword.remove(&headword))
        .collect()
}
