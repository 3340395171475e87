//! Client settings read from the environment

use crate::constants::{DEFAULT_LOCALE, DEFAULT_TIMEOUT_SECS};
use crate::error::{EbirdError, Result};
use crate::transport::Transport;
use crate::validation::clean_locale;
use std::env;
use std::time::Duration;

/// Client configuration parsed from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub locale: String,
    pub base_url: String,
    pub legacy_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Parse configuration from environment variables.
    ///
    /// `EBIRD_API_KEY` is required. `EBIRD_LOCALE`, `EBIRD_BASE_URL`,
    /// `EBIRD_LEGACY_URL` and `EBIRD_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("EBIRD_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| EbirdError::Config("EBIRD_API_KEY is not set".to_string()))?;

        let locale = match lookup("EBIRD_LOCALE") {
            Some(locale) => clean_locale(&locale)
                .map_err(|_| EbirdError::Config(format!("Unsupported EBIRD_LOCALE: {}", locale)))?,
            None => DEFAULT_LOCALE.to_string(),
        };

        let base_url =
            lookup("EBIRD_BASE_URL").unwrap_or_else(|| Transport::BASE_URL.to_string());

        let legacy_url =
            lookup("EBIRD_LEGACY_URL").unwrap_or_else(|| Transport::LEGACY_URL.to_string());

        let timeout = lookup("EBIRD_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            locale,
            base_url,
            legacy_url,
            timeout: Duration::from_secs(timeout),
        })
    }

    /// Transport using the configured servers and timeout
    pub fn transport(&self) -> Transport {
        Transport::with_timeout(self.timeout)
            .with_base_url(&self.base_url)
            .with_legacy_url(&self.legacy_url)
    }
}
