//! Bot configuration.

use crate::error::BotError;

/// Runtime configuration for the bot.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Base URL of the Honeypot recruiting API.
    pub api_base_url: String,
}

impl BotConfig {
    /// Build a config with the given API base URL.
    ///
    /// Trailing slashes are trimmed so path joins stay clean.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let mut url = api_base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        Self { api_base_url: url }
    }

    /// Load from environment variables.
    ///
    /// - `URL` - base URL of the recruiting API (required).
    pub fn from_env() -> Result<Self, BotError> {
        let url = std::env::var("URL").map_err(|_| BotError::MissingBaseUrl)?;
        Ok(Self::new(url))
    }
}
