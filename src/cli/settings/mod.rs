//! Settings management for CLI set/unset commands.
//!
//! Each configuration key has a [`SettingHandler`] that validates input and
//! edits a [`Config`] in memory; [`apply_setting_at`] wraps a handler call in
//! a load/save of the config file.

pub mod error;
pub mod handlers;
pub mod registry;

use std::path::Path;

pub use error::SettingError;
pub use registry::SettingRegistry;

use crate::core::config::data::Config;

/// Trait for handling a configuration setting.
pub trait SettingHandler: Send + Sync {
    /// Returns the configuration key this handler manages.
    fn key(&self) -> &'static str;

    /// Set the value from the arguments given after the key. Returns the
    /// message to display.
    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError>;

    /// Clear the value so the default applies again.
    fn unset(&self, config: &mut Config) -> Result<String, SettingError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingChange {
    Set(Vec<String>),
    Unset,
}

/// Load the config at `path`, apply `change` to `key`, and save it back.
/// Nothing is written when the handler rejects the change.
pub fn apply_setting_at(
    path: &Path,
    key: &str,
    change: &SettingChange,
) -> Result<String, SettingError> {
    let registry = SettingRegistry::new();
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;

    let mut config =
        Config::load_from_path(path).map_err(|e| SettingError::ConfigError(e.to_string()))?;

    let message = match change {
        SettingChange::Set(args) => handler.set(args, &mut config)?,
        SettingChange::Unset => handler.unset(&mut config)?,
    };

    config
        .save_to_path(path)
        .map_err(|e| SettingError::ConfigError(e.to_string()))?;
    Ok(message)
}

/// [`apply_setting_at`] against the default config location.
pub fn apply_setting(key: &str, change: &SettingChange) -> Result<String, SettingError> {
    let path = Config::config_path().map_err(|e| SettingError::ConfigError(e.to_string()))?;
    apply_setting_at(&path, key, change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_then_unset_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        apply_setting_at(&path, "top-k", &SettingChange::Set(vec!["3".into()])).unwrap();
        apply_setting_at(
            &path,
            "service-url",
            &SettingChange::Set(vec!["http://wh.local:9000/".into()]),
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.top_k, Some(3));
        assert_eq!(config.service_url.as_deref(), Some("http://wh.local:9000"));

        apply_setting_at(&path, "top-k", &SettingChange::Unset).unwrap();
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.top_k, None);
        assert_eq!(config.service_url.as_deref(), Some("http://wh.local:9000"));
    }

    #[test]
    fn unknown_key_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let err = apply_setting_at(&path, "model", &SettingChange::Unset).unwrap_err();
        assert!(matches!(err, SettingError::UnknownKey(ref key) if key == "model"));
        assert!(!path.exists());
    }

    #[test]
    fn rejected_value_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        apply_setting_at(&path, "timeout", &SettingChange::Set(vec!["30".into()])).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = apply_setting_at(&path, "timeout", &SettingChange::Set(vec!["soon".into()]))
            .unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn broken_config_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "top_k = [").unwrap();

        let err = apply_setting_at(&path, "top-k", &SettingChange::Unset).unwrap_err();
        assert!(matches!(err, SettingError::ConfigError(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
