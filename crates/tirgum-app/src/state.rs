use std::sync::Arc;
use std::time::Duration;

use tirgum_config::Config;
use tirgum_core::{AlwaysOnline, Connectivity, TcpProbe, TranslationSession};
use tirgum_lang_amharic::{MyMemoryTranslator, probe_address};
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub session: TranslationSession,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        if config.translator.provider != "mymemory" {
            anyhow::bail!(
                "unsupported translation provider '{}'",
                config.translator.provider
            );
        }

        let translator = Arc::new(MyMemoryTranslator::new(config.translator.api_url.clone()));
        let session = TranslationSession::new(
            translator,
            connectivity_for(&config),
            config.ui.direction,
            Duration::from_millis(config.debounce_ms),
        );

        Ok(Self::with_session(config, session))
    }

    pub fn with_session(config: Config, session: TranslationSession) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            session,
        }
    }
}

fn connectivity_for(config: &Config) -> Arc<dyn Connectivity> {
    if !config.network.check_connectivity {
        return Arc::new(AlwaysOnline);
    }

    match probe_address(&config.translator.api_url) {
        Some(address) => {
            tracing::debug!("Connectivity probe target: {address}");
            Arc::new(TcpProbe::new(
                address,
                Duration::from_millis(config.network.connectivity_timeout_ms),
            ))
        }
        None => {
            tracing::warn!(
                "Cannot derive probe address from '{}', assuming online",
                config.translator.api_url
            );
            Arc::new(AlwaysOnline)
        }
    }
}
