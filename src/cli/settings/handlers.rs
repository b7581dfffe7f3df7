//! Handlers for the keys `set`/`unset` understand.

use crate::cli::settings::error::SettingError;
use crate::cli::settings::SettingHandler;
use crate::core::config::data::Config;
use crate::utils::url::normalize_base_url;

pub fn success_set(key: &str, value: &str) -> String {
    format!("✅ Set {key} to: {value}")
}

pub fn success_unset(key: &str) -> String {
    format!("✅ Unset {key}")
}

fn single_arg<'a>(
    args: &'a [String],
    hint: &'static str,
    example: &'static str,
) -> Result<&'a str, SettingError> {
    match args {
        [] => Err(SettingError::MissingArgs { hint, example }),
        [value] if !value.trim().is_empty() => Ok(value.trim()),
        _ => Err(SettingError::MissingArgs { hint, example }),
    }
}

/// Handler for the `service-url` setting.
pub struct ServiceUrlHandler;

impl SettingHandler for ServiceUrlHandler {
    fn key(&self) -> &'static str {
        "service-url"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let input = single_arg(
            args,
            "To set the service address, give one http(s) URL:",
            "warehouse-chat set service-url http://localhost:8000",
        )?;

        let url = normalize_base_url(input);
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SettingError::InvalidValue {
                key: "service-url",
                input: input.to_string(),
                expected: "an http:// or https:// URL",
            });
        }

        let message = success_set(self.key(), &url);
        config.service_url = Some(url);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.service_url = None;
        Ok(success_unset(self.key()))
    }
}

/// Handler for the `top-k` setting.
pub struct TopKHandler;

impl SettingHandler for TopKHandler {
    fn key(&self) -> &'static str {
        "top-k"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let input = single_arg(
            args,
            "To set top-k, give a positive whole number:",
            "warehouse-chat set top-k 5",
        )?;

        let top_k = input
            .parse::<u32>()
            .ok()
            .filter(|value| *value > 0)
            .ok_or_else(|| SettingError::InvalidValue {
                key: "top-k",
                input: input.to_string(),
                expected: "a positive whole number",
            })?;

        config.top_k = Some(top_k);
        Ok(success_set(self.key(), &top_k.to_string()))
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.top_k = None;
        Ok(success_unset(self.key()))
    }
}

/// Handler for the `timeout` setting, in seconds. Zero waits forever.
pub struct TimeoutHandler;

impl SettingHandler for TimeoutHandler {
    fn key(&self) -> &'static str {
        "timeout"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let input = single_arg(
            args,
            "To set the request timeout, give a number of seconds (0 disables it):",
            "warehouse-chat set timeout 30",
        )?;

        let secs = input
            .parse::<u64>()
            .map_err(|_| SettingError::InvalidValue {
                key: "timeout",
                input: input.to_string(),
                expected: "a whole number of seconds",
            })?;

        config.request_timeout_secs = Some(secs);
        Ok(success_set(self.key(), &format!("{secs}s")))
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.request_timeout_secs = None;
        Ok(success_unset(self.key()))
    }
}
