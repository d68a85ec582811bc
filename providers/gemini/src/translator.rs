use async_trait::async_trait;
use lingo_translator::{
    LanguageCode, ProviderMetadata, TranslateError, Translation, Translator,
};

use crate::client::{GeminiClient, GeminiError};

#[derive(Clone)]
pub struct GeminiTranslator {
    client: GeminiClient,
}

impl GeminiTranslator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

// Prompted translation: the model is asked in plain English and the raw
// completion is taken as the translated text.
#[async_trait]
impl Translator for GeminiTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let prompt = format!(
            "Translate the following {} text to {}: \"{}\"",
            language_name(&from),
            language_name(&to),
            text
        );

        let translated = self.client.generate_content(&prompt).await.map_err(|e| {
            match e {
                GeminiError::MissingApiKey => TranslateError::AuthenticationError,
                GeminiError::RateLimitExceeded => TranslateError::RateLimitExceeded,
                GeminiError::Network(e) => TranslateError::NetworkError(e),
                GeminiError::Api(message) => TranslateError::ApiError(message),
                GeminiError::EmptyCompletion => {
                    TranslateError::ApiError("No translation in response".to_string())
                }
            }
        })?;

        Ok(Translation {
            text: translated.trim().to_string(),
            from,
            to,
            provider: "gemini".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            requires_api_key: true,
        }
    }
}

/// Spell out the codes the app uses so prompts stay readable to the model.
fn language_name(code: &str) -> &str {
    match code {
        "en" => "English",
        "ja" => "Japanese",
        "zh" => "Chinese",
        "ko" => "Korean",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_are_spelled_out() {
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("ja"), "Japanese");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(language_name("eo"), "eo");
    }
}
