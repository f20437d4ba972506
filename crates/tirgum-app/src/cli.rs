use std::path::PathBuf;

use clap::Parser;
use tirgum_config::Config;
use tirgum_config::log::LogFormat;
use tirgum_types::Direction;

/// English ⇄ Amharic translator for the terminal
#[derive(Debug, Parser)]
#[command(name = "tirgum", version, about)]
pub struct Args {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Starting direction: en|am or am|en
    #[arg(short, long)]
    pub direction: Option<Direction>,

    /// Text the input box starts with
    #[arg(short, long)]
    pub text: Option<String>,

    /// Quiet period in milliseconds before typing triggers a translation
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Translation endpoint
    #[arg(long)]
    pub api_url: Option<String>,

    /// Probe the API host before each request
    #[arg(long, overrides_with = "no_offline_check")]
    pub offline_check: bool,

    /// Skip the reachability probe before each request
    #[arg(long, overrides_with = "offline_check")]
    pub no_offline_check: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Command line flags win over file and environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(direction) = self.direction {
            config.ui.direction = direction;
        }
        if let Some(text) = &self.text {
            config.ui.initial_text = text.clone();
        }
        if let Some(ms) = self.debounce_ms {
            config.debounce_ms = ms;
        }
        if let Some(url) = &self.api_url {
            config.translator.api_url = url.clone();
        }
        if self.offline_check {
            config.network.check_connectivity = true;
        } else if self.no_offline_check {
            config.network.check_connectivity = false;
        }
        if self.json_logs {
            config.log.format = LogFormat::Json;
        }
    }
}
