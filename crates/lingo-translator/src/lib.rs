pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Translate English source text to Japanese, the app's default direction
    async fn translate_to_japanese(&self, text: &str) -> Result<Translation, TranslateError> {
        self.translate(text, "en".to_string(), "ja".to_string())
            .await
    }

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTranslator;

    #[async_trait::async_trait]
    impl Translator for EchoTranslator {
        async fn translate(
            &self,
            text: &str,
            from: LanguageCode,
            to: LanguageCode,
        ) -> Result<Translation, TranslateError> {
            Ok(Translation {
                text: text.to_string(),
                from,
                to,
                provider: "echo".to_string(),
            })
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "Echo".to_string(),
                requires_api_key: false,
            }
        }
    }

    #[tokio::test]
    async fn default_direction_is_english_to_japanese() {
        let translation = EchoTranslator.translate_to_japanese("hello").await.unwrap();
        assert_eq!(translation.from, "en");
        assert_eq!(translation.to, "ja");
    }
}
