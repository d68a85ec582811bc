use serde_json::json;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    #[error("Gemini API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Model returned no completion")]
    EmptyCompletion,
}

/// Thin client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_endpoint(api_key, model, DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(api_key: String, model: String, endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            endpoint,
        }
    }

    /// Run a single-turn prompt and return the first candidate's text.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        if self.api_key.is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(GeminiError::RateLimitExceeded);
        }

        if response.status() == 403 {
            return Err(GeminiError::Api("authentication rejected".to_string()));
        }

        if !response.status().is_success() {
            return Err(GeminiError::Api(format!("HTTP {}", response.status())));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GeminiError::Api(format!("Failed to parse response: {}", e)))?;

        tracing::debug!(model = %self.model, "Gemini completion received");

        candidate_text(&json).ok_or(GeminiError::EmptyCompletion)
    }
}

/// First candidate text out of a `generateContent` response body.
pub(crate) fn candidate_text(value: &serde_json::Value) -> Option<String> {
    value
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|text| text.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_first_candidate_text() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "走る" }], "role": "model" },
                "finishReason": "STOP"
            }]
        });

        assert_eq!(candidate_text(&body).as_deref(), Some("走る"));
    }

    #[test]
    fn empty_candidate_list_yields_none() {
        let body = json!({ "candidates": [] });
        assert!(candidate_text(&body).is_none());
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = GeminiClient::new(String::new(), "gemini-pro".to_string());
        let result = client.generate_content("hello").await;
        assert!(matches!(result, Err(GeminiError::MissingApiKey)));
    }
}
