//! Diagnostic logging.
//!
//! The chat screen owns the terminal, so tracing output only goes somewhere
//! when a log file is given. Without one, events are discarded.

use std::error::Error;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// `RUST_LOG` when set and valid, else [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to `log_file`. No-op without a path.
pub fn init_tracing(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = open_log_file(path)
        .map_err(|err| format!("cannot open log file {}: {err}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn log_file_is_appended_not_truncated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chat.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn missing_log_path_installs_nothing() {
        assert!(init_tracing(None).is_ok());
    }

    #[test]
    fn unwritable_log_path_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("chat.log");
        let err = init_tracing(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("cannot open log file"));
    }
}
