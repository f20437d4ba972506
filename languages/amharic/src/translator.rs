use async_trait::async_trait;
use tirgum_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};
use tirgum_types::Direction;

use crate::response::translated_text;

/// Free MyMemory endpoint, one GET per translation
#[derive(Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl MyMemoryTranslator {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Build the GET request, text and pair are query-encoded
    pub fn build_request(&self, text: &str, lang_pair: &str) -> reqwest::Result<reqwest::Request> {
        self.client
            .get(&self.api_url)
            .query(&[("q", text), ("langpair", lang_pair)])
            .build()
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if !self.supports(&from, &to) {
            return Err(TranslateError::UnsupportedLanguagePair { from, to });
        }

        let lang_pair = format!("{from}|{to}");
        let request = self.build_request(text, &lang_pair)?;
        tracing::debug!("GET {} ({} chars)", self.api_url, text.chars().count());

        // The service reports failures inside the body, so the HTTP status is not checked
        let response = self.client.execute(request).await?;
        let http_status = response.status();
        let body = response.text().await?;

        let text = translated_text(&body).inspect_err(|e| {
            tracing::debug!("{lang_pair} failed with HTTP {http_status}: {e}");
        })?;

        Ok(Translation {
            text,
            from,
            to,
            provider: "mymemory".to_string(),
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
            name: "MyMemory".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// `host:port` of the API, used for the reachability probe
pub fn probe_address(api_url: &str) -> Option<String> {
    let url = reqwest::Url::parse(api_url).ok()?;
    let host = url.host_str()?;
    let port = url.port_or_known_default()?;
    Some(format!("{host}:{port}"))
}
