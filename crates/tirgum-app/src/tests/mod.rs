use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tirgum_config::Config;
use tirgum_core::{AlwaysOnline, TranslationSession};
use tirgum_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};
use tirgum_types::Direction;

use crate::state::AppState;

mod ui_tests;

/// Answers `[from|to] text` after a short delay
#[derive(Default)]
pub struct TaggingTranslator {
    calls: Mutex<Vec<(String, String)>>,
}

impl TaggingTranslator {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for TaggingTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let pair = format!("{from}|{to}");
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), pair.clone()));
        tokio::time::sleep(Duration::from_millis(20)).await;

        Ok(Translation {
            text: format!("[{pair}] {text}"),
            from,
            to,
            provider: "tagging".to_string(),
        })
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        Direction::ALL
            .iter()
            .map(|d| (d.source().to_string(), d.target().to_string()))
            .collect()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Tagging".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

pub fn test_state() -> (Arc<AppState>, Arc<TaggingTranslator>) {
    let config = Config::default();
    let translator = Arc::new(TaggingTranslator::default());
    let session = TranslationSession::new(
        translator.clone(),
        Arc::new(AlwaysOnline),
        config.ui.direction,
        Duration::from_millis(config.debounce_ms),
    );

    (Arc::new(AppState::with_session(config, session)), translator)
}
