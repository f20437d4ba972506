use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::log::{LogConfig, LogFormat};
use self::network::NetworkConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod log;
pub mod network;
pub mod translator;
pub mod ui;

fn default_debounce_ms() -> u64 {
    500
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to open config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub network: NetworkConfig,
    pub ui: UiConfig,
    pub log: LogConfig,

    /// Quiet period after the last keystroke before a translation is requested
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translator: TranslatorConfig::default(),
            network: NetworkConfig::default(),
            ui: UiConfig::default(),
            log: LogConfig::default(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Config {
    /// Read a JSON config file, missing fields fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// File config (if any) with environment overrides on top
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_vars(|key| env::var(key).ok());
    }

    /// Apply overrides from a variable lookup. Unparsable values are ignored.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("TRANSLATOR_API_URL") {
            self.translator.api_url = url;
        }

        if let Some(ms) = lookup("DEBOUNCE_MS").and_then(|v| v.parse().ok()) {
            self.debounce_ms = ms;
        }

        if let Some(check) = lookup("CHECK_CONNECTIVITY").and_then(|v| parse_bool(&v)) {
            self.network.check_connectivity = check;
        }

        if let Some(ms) = lookup("CONNECTIVITY_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.network.connectivity_timeout_ms = ms;
        }

        if let Some(text) = lookup("INITIAL_TEXT") {
            self.ui.initial_text = text;
        }

        if let Some(direction) = lookup("DIRECTION").and_then(|v| v.parse().ok()) {
            self.ui.direction = direction;
        }

        if let Some(format) = lookup("LOG_FORMAT").and_then(|v| LogFormat::parse(&v)) {
            self.log.format = format;
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tirgum_types::Direction;

    use super::*;

    #[test]
    fn defaults_match_web_client() {
        let config = Config::default();
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(
            config.translator.api_url,
            "https://api.mymemory.translated.net/get"
        );
        assert_eq!(config.ui.initial_text, "Nice to see you");
        assert_eq!(config.ui.direction, Direction::EnglishToAmharic);
        assert!(config.network.check_connectivity);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r#"{ "debounce_ms": 250, "ui": { "direction": "am|en" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.ui.direction, Direction::AmharicToEnglish);
        assert_eq!(config.ui.initial_text, "Nice to see you");
        assert_eq!(config.translator, TranslatorConfig::default());
    }

    #[test]
    fn env_overrides_apply() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("DEBOUNCE_MS", "120"),
            ("CHECK_CONNECTIVITY", "off"),
            ("DIRECTION", "am|en"),
            ("LOG_FORMAT", "json"),
            ("CONNECTIVITY_TIMEOUT_MS", "not-a-number"),
        ]);

        let mut config = Config::default();
        config.apply_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.debounce_ms, 120);
        assert!(!config.network.check_connectivity);
        assert_eq!(config.ui.direction, Direction::AmharicToEnglish);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.network.connectivity_timeout_ms, 1500);
    }

    #[test]
    fn load_reads_json_file() {
        let path = env::temp_dir().join(format!("tirgum-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "log": { "format": "json" }, "debounce_ms": 300 }"#).unwrap();

        let loaded = Config::load(Some(&path));
        std::fs::remove_file(&path).unwrap();

        let config = loaded.unwrap();
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.ui.initial_text, "Nice to see you");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
