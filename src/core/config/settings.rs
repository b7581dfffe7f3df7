//! Effective service settings, resolved once at startup.

use std::time::Duration;

use crate::core::config::data::{
    Config, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVICE_URL, SERVICE_URL_ENV,
};
use crate::utils::url::normalize_base_url;

/// Values given on the command line; each one wins over every other source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingOverrides {
    pub service_url: Option<String>,
    pub top_k: Option<u32>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub base_url: String,
    pub top_k: Option<u32>,
    /// `None` means the call may wait indefinitely.
    pub request_timeout: Option<Duration>,
}

impl ServiceSettings {
    /// Precedence for the address: CLI flag, then `WAREHOUSE_API_URL`, then
    /// the config file, then [`DEFAULT_SERVICE_URL`]. Blank values are skipped.
    pub fn resolve(overrides: &SettingOverrides, env_url: Option<&str>, config: &Config) -> Self {
        let base_url = [
            overrides.service_url.as_deref(),
            env_url,
            config.service_url.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(normalize_base_url)
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

        let timeout_secs = overrides
            .request_timeout_secs
            .or(config.request_timeout_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            base_url,
            top_k: overrides.top_k.or(config.top_k),
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        }
    }

    pub fn from_environment(overrides: &SettingOverrides, config: &Config) -> Self {
        let env_url = std::env::var(SERVICE_URL_ENV).ok();
        Self::resolve(overrides, env_url.as_deref(), config)
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self::resolve(&SettingOverrides::default(), None, &Config::default())
    }
}
