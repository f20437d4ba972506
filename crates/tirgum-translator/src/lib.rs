use tirgum_types::Direction;

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

    /// Get supported language pairs
    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;

    /// Translate along one of the fixed directions
    async fn translate_direction(
        &self,
        text: &str,
        direction: Direction,
    ) -> Result<Translation, TranslateError> {
        self.translate(
            text,
            direction.source().to_string(),
            direction.target().to_string(),
        )
        .await
    }

    fn supports(&self, from: &str, to: &str) -> bool {
        self.supported_languages()
            .iter()
            .any(|(f, t)| f == from && t == to)
    }
}

#[derive(Debug, Clone, PartialEq)]
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
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The service answered but without a usable translation
    #[error("Translation rejected (status: {status:?})")]
    Rejected { status: Option<i64> },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },
}

impl TranslateError {
    /// Failure to reach the service or read its answer
    pub fn is_transport(&self) -> bool {
        matches!(self, TranslateError::Network(_) | TranslateError::Decode(_))
    }
}
