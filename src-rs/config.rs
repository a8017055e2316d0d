use std::env;
use std::path::PathBuf;

use tracing_subscriber::filter::LevelFilter;

use crate::client::DEFAULT_BASE_URL;
use crate::error::{AgentError, Result};

pub const TOKEN_VAR: &str = "CLICKUP_API_TOKEN";
pub const BASE_URL_VAR: &str = "CLICKUP_BASE_URL";
pub const LOG_DIR_VAR: &str = "CLICKUP_AGENT_LOG_DIR";
pub const LOG_FILTER_VAR: &str = "CLICKUP_AGENT_LOG";

/// Value shipped in the sample `.env`; treated the same as an unset token.
pub const PLACEHOLDER_TOKEN: &str = "YOUR_API_TOKEN";

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub file_filter: String,
    pub console_level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            file_filter: "info".to_string(),
            console_level: LevelFilter::WARN,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub api_token: Option<String>,
    pub base_url: String,
    pub log: LogConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            log: LogConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut settings = Settings::default();
        settings.api_token = get(TOKEN_VAR);
        if let Some(url) = get(BASE_URL_VAR) {
            settings.base_url = url;
        }
        if let Some(dir) = get(LOG_DIR_VAR) {
            settings.log.dir = PathBuf::from(dir);
        }
        if let Some(filter) = get(LOG_FILTER_VAR) {
            settings.log.file_filter = filter;
        }
        settings
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    /// The configured API token, unless it is missing or still the placeholder.
    pub fn token(&self) -> Result<&str> {
        match self.api_token.as_deref() {
            Some(token) if token != PLACEHOLDER_TOKEN => Ok(token),
            _ => Err(AgentError::Config(format!(
                "{} is not set; please configure it in the environment or a .env file",
                TOKEN_VAR
            ))),
        }
    }
}
