use anyhow::{Context, Result};
use lingo_types::{SavedWord, WordEntry};
use serde::{Deserialize, Serialize};

/// Client for the saved-word store, a PostgREST-style HTTP API.
///
/// The capacity cap is enforced here, before any insert; the store itself
/// does not guard it transactionally.
#[derive(Clone)]
pub struct WordStoreClient {
    base_url: String,
    api_key: String,
    capacity: usize,
    client: reqwest::Client,
}

impl WordStoreClient {
    pub fn new(base_url: String, api_key: String, capacity: usize) -> Self {
        Self {
            base_url,
            api_key,
            capacity,
            client: reqwest::Client::new(),
        }
    }

    /// All saved words for a user, newest first.
    pub async fn list_words(&self, user_id: &str) -> Result<Vec<SavedWord>> {
        let user_filter = format!("eq.{user_id}");
        let response = self
            .client
            .get(self.table_url())
            .query(&[
                ("user_id", user_filter.as_str()),
                ("select", "*"),
                ("order", "created_at.desc"),
            ])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .context("Failed to reach the word store")?;

        anyhow::ensure!(
            response.status().is_success(),
            "word store list failed with status {}",
            response.status()
        );

        response
            .json::<Vec<SavedWord>>()
            .await
            .context("Failed to parse the saved word list")
    }

    /// How many words a user currently has saved.
    pub async fn count_words(&self, user_id: &str) -> Result<usize> {
        #[derive(Deserialize)]
        struct IdRow {
            #[allow(dead_code)]
            id: i64,
        }

        let user_filter = format!("eq.{user_id}");
        let response = self
            .client
            .get(self.table_url())
            .query(&[("user_id", user_filter.as_str()), ("select", "id")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .context("Failed to reach the word store")?;

        anyhow::ensure!(
            response.status().is_success(),
            "word store count failed with status {}",
            response.status()
        );

        let rows: Vec<IdRow> = response
            .json()
            .await
            .context("Failed to parse the saved word count")?;

        Ok(rows.len())
    }

    /// Save one word for a user. Fails without issuing the insert when the
    /// user is already at capacity.
    pub async fn save_word(&self, user_id: &str, entry: &WordEntry) -> Result<SavedWord> {
        let current = self.count_words(user_id).await?;
        ensure_capacity(current, self.capacity)?;

        let row = NewSavedWord {
            user_id,
            entry: entry.clone(),
        };

        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .context("Failed to reach the word store")?;

        anyhow::ensure!(
            response.status().is_success(),
            "word store insert failed with status {}",
            response.status()
        );

        let mut rows: Vec<SavedWord> = response
            .json()
            .await
            .context("Failed to parse the inserted word")?;

        tracing::info!(user_id, english = %entry.english, "word saved");

        rows.pop().context("Word store returned no inserted row")
    }

    /// Delete a saved word by its server id.
    pub async fn remove_word(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.table_url())
            .query(&[("id", format!("eq.{id}"))])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .context("Failed to reach the word store")?;

        anyhow::ensure!(
            response.status().is_success(),
            "word store delete failed with status {}",
            response.status()
        );

        Ok(())
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/saved_words", self.base_url)
    }
}

#[derive(Serialize)]
struct NewSavedWord<'a> {
    user_id: &'a str,
    #[serde(flatten)]
    entry: WordEntry,
}

fn ensure_capacity(current: usize, capacity: usize) -> Result<()> {
    anyhow::ensure!(
        current < capacity,
        "saved word limit reached ({capacity} words)"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_blocks_only_at_the_limit() {
        assert!(ensure_capacity(0, 200).is_ok());
        assert!(ensure_capacity(199, 200).is_ok());
        assert!(ensure_capacity(200, 200).is_err());
        assert!(ensure_capacity(250, 200).is_err());
    }

    #[test]
    fn insert_row_uses_upstream_field_names() {
        let row = NewSavedWord {
            user_id: "u-1",
            entry: WordEntry {
                english: "run".into(),
                japanese: "走る".into(),
                part_of_speech: "動詞".into(),
                example: "I run.".into(),
            },
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["user_id"], "u-1");
        assert_eq!(json["english"], "run");
        assert_eq!(json["partOfSpeech"], "動詞");
    }
}
