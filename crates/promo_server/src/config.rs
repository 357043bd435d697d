//! Bot configuration from the environment.

use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{info, instrument, warn};

/// Environment variable holding the bot token.
pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable holding the hosted game URL.
pub const WEBAPP_URL_VAR: &str = "TELEGRAM_WEBAPP_URL";
/// Environment variable overriding the Bot API base URL.
pub const API_BASE_VAR: &str = "TELEGRAM_API_BASE";
/// Default Bot API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Settings for the webhook and relay endpoints.
///
/// Missing values do not stop the server from starting; each request
/// checks what it needs and reports the gap to its caller.
#[derive(Debug, Clone, Getters)]
pub struct BotConfig {
    /// Bot API token.
    token: Option<String>,
    /// URL of the hosted game, used for the launch button.
    webapp_url: Option<String>,
    /// Bot API base URL.
    api_base: String,
}

impl BotConfig {
    /// Creates a configuration with the default API base.
    pub fn new(token: Option<String>, webapp_url: Option<String>) -> Self {
        Self {
            token,
            webapp_url,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Reads the configuration from environment variables.
    ///
    /// Empty variables count as unset.
    #[instrument]
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        let config = Self {
            token: var(TOKEN_VAR),
            webapp_url: var(WEBAPP_URL_VAR),
            api_base: var(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        };
        if config.token.is_none() {
            warn!("{} is not set, endpoints will reject requests", TOKEN_VAR);
        }
        if config.webapp_url.is_none() {
            warn!("{} is not set, the webhook will reject requests", WEBAPP_URL_VAR);
        }
        info!(api_base = %config.api_base, "Bot configuration loaded");
        config
    }

    /// Overrides the Bot API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Returns the token or the error naming its variable.
    #[track_caller]
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        self.token.as_deref().ok_or_else(|| ConfigError::missing(TOKEN_VAR))
    }

    /// Returns the web-app URL or the error naming its variable.
    #[track_caller]
    pub fn require_webapp_url(&self) -> Result<&str, ConfigError> {
        self.webapp_url
            .as_deref()
            .ok_or_else(|| ConfigError::missing(WEBAPP_URL_VAR))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} is not set at {}:{}", variable, file, line)]
pub struct ConfigError {
    /// Name of the missing variable.
    pub variable: &'static str,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a missing-variable error with caller location tracking.
    #[track_caller]
    pub fn missing(variable: &'static str) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            variable,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
