//! The word-list fetcher: run the extraction workflow, scan the streamed
//! body for the first usable payload, then dedup and sample.

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use lingo_core::sample::sample;
use lingo_types::{GenerateWordsParams, WordEntry};
use rand::Rng;
use serde_json::json;

use crate::client::DifyClient;
use crate::extract::{dedup_by_headword, scan_chunk};

/// Everything that can go wrong while generating a word list. Callers are
/// expected to show the message and let the user re-run; no cause is
/// retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("workflow request failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error("workflow request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("no usable word payload before end of stream")]
    NoPayload,
}

impl DifyClient {
    /// Generate a deduplicated word list of at most `params.words` entries,
    /// sampled with a thread-local RNG.
    pub async fn generate_word_list(
        &self,
        params: &GenerateWordsParams,
    ) -> Result<Vec<WordEntry>, WordListError> {
        self.generate_word_list_with(params, &mut rand::thread_rng())
            .await
    }

    /// Same as [`generate_word_list`](Self::generate_word_list) with an
    /// injectable random source.
    pub async fn generate_word_list_with<R: Rng + ?Sized>(
        &self,
        params: &GenerateWordsParams,
        rng: &mut R,
    ) -> Result<Vec<WordEntry>, WordListError> {
        // Ask for twice the target count so dedup and sampling have slack
        let inputs = json!({
            "TOEIC_LEVEL": params.toeic_level,
            "WORDS_EXTRACT_NUMBER": params.words * 2,
            "input_text": params.text,
        });

        let response = self.run_workflow(inputs, "blocking").await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WordListError::Status(status));
        }
        tracing::debug!(%status, "workflow run accepted");

        let entries = scan_stream(response.bytes_stream()).await?;
        let unique = dedup_by_headword(entries);

        let selected = sample(unique, params.words, rng);
        tracing::info!(selected = selected.len(), "word list generated");

        Ok(selected)
    }
}

/// Read chunks until one yields a word payload.
///
/// A chunk that fails to parse is skipped; only a transport error or end of
/// stream stops the loop. Malformed chunks and a not-yet-complete stream
/// are deliberately indistinguishable here.
async fn scan_stream<S>(chunks: S) -> Result<Vec<WordEntry>, WordListError>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>>,
{
    futures_util::pin_mut!(chunks);

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        if let Some(entries) = scan_chunk(&chunk) {
            return Ok(entries);
        }
    }

    Err(WordListError::NoPayload)
}

#[cfg(test)]
mod tests {
    use futures_util::stream;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn ok(chunk: &'static [u8]) -> Result<Bytes, reqwest::Error> {
        Ok(Bytes::from_static(chunk))
    }

    const WORDS_CHUNK: &str = r#"{"data": {"outputs": {"words": "[{\"english\": \"run\", \"japanese\": \"走る\"}, {\"english\": \"run\", \"japanese\": \"走行する\"}, {\"english\": \"jump\", \"japanese\": \"跳ぶ\"}]"}}}"#;

    #[tokio::test]
    async fn malformed_chunks_are_skipped_until_a_valid_one() {
        let chunks = stream::iter(vec![ok(b"not json"), ok(WORDS_CHUNK.as_bytes())]);

        let entries = scan_stream(chunks).await.unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].english, "run");
    }

    #[tokio::test]
    async fn stream_without_payload_is_a_single_typed_error() {
        let chunks = stream::iter(vec![
            ok(b"not json"),
            ok(br#"{"event": "workflow_started"}"#),
        ]);

        let result = scan_stream(chunks).await;
        assert!(matches!(result, Err(WordListError::NoPayload)));
    }

    #[tokio::test]
    async fn empty_stream_is_the_same_error() {
        let chunks = stream::iter(Vec::<Result<Bytes, reqwest::Error>>::new());
        assert!(matches!(
            scan_stream(chunks).await,
            Err(WordListError::NoPayload)
        ));
    }

    #[test]
    fn dedup_then_sample_returns_all_unique_words_when_supply_is_short() {
        let entries = scan_chunk(WORDS_CHUNK.as_bytes()).unwrap();
        let unique = dedup_by_headword(entries);
        assert_eq!(unique.len(), 2);

        // 2 unique < 5 requested: both come back, still unique
        let mut rng = StdRng::seed_from_u64(1);
        let selected = sample(unique, 5, &mut rng);
        assert_eq!(selected.len(), 2);

        let mut headwords: Vec<_> = selected.iter().map(|e| e.english.as_str()).collect();
        headwords.sort_unstable();
        assert_eq!(headwords, vec!["jump", "run"]);
    }

    #[test]
    fn sampling_honors_the_requested_count_with_enough_supply() {
        let entries: Vec<WordEntry> = (0..10)
            .map(|i| WordEntry {
                english: format!("word{i}"),
                japanese: format!("単語{i}"),
                part_of_speech: String::new(),
                example: String::new(),
            })
            .collect();

        let unique = dedup_by_headword(entries);
        let mut rng = StdRng::seed_from_u64(2);
        let selected = sample(unique, 4, &mut rng);

        assert_eq!(selected.len(), 4);
        let mut headwords: Vec<_> = selected.iter().map(|e| e.english.clone()).collect();
        headwords.sort_unstable();
        headwords.dedup();
        assert_eq!(headwords.len(), 4);
    }
}
