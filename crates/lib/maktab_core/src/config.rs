//! Console configuration.

use std::path::PathBuf;
use std::time::Duration;

/// HTTP timeout applied to every backend call when none is configured.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Configuration for the console client.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the Maktab backend (e.g. "http://127.0.0.1:8080").
    pub api_base_url: String,
    /// Timeout applied to every HTTP request.
    pub http_timeout: Duration,
    /// Directory holding the persisted session entries.
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                   | Default                       |
    /// |----------------------------|-------------------------------|
    /// | `MAKTAB_API_BASE_URL`      | `http://127.0.0.1:8080`       |
    /// | `MAKTAB_HTTP_TIMEOUT_SECS` | `30`                          |
    /// | `MAKTAB_DATA_DIR`          | `<platform data dir>/maktab`  |
    pub fn from_env() -> Self {
        let timeout_secs = std::env::var("MAKTAB_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Self {
            api_base_url: std::env::var("MAKTAB_API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".into()),
            http_timeout: Duration::from_secs(timeout_secs),
            data_dir: std::env::var("MAKTAB_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
        }
    }
}

/// Default session data directory: the platform data dir plus `maktab`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("maktab")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_dir_ends_with_maktab() {
        assert!(default_data_dir().ends_with("maktab"));
    }
}
