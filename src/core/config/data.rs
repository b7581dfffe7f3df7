use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Address used when neither the CLI, the environment nor the config file
/// name one.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Environment variable consulted for the service address.
pub const SERVICE_URL_ENV: &str = "WAREHOUSE_API_URL";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address of the query service (e.g., "http://localhost:8000")
    pub service_url: Option<String>,
    /// Forwarded to the service as `top_k`; omitted means `null`
    pub top_k: Option<u32>,
    /// Upper bound on a single query; 0 waits forever
    pub request_timeout_secs: Option<u64>,
}

pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            if let Ok(relative) = path.strip_prefix(PathBuf::from(home)) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
