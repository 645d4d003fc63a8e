//! Application configuration.

use std::{env, path::PathBuf, time::Duration};

/// Environment variable naming the storage data directory.
pub const DATA_DIR_ENV: &str = "TROVE_DATA_DIR";

const DEFAULT_DATA_DIR: &str = ".trove";

/// Fixed delay applied to login and registration to mimic a remote
/// round-trip. Uninterruptible once started.
const SIMULATED_AUTH_LATENCY: Duration = Duration::from_millis(1000);

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory the JSON file storage writes under.
    pub data_dir: PathBuf,

    /// Simulated latency for the authentication flow.
    pub simulated_auth_latency: Duration,
}

impl AppConfig {
    /// Load configuration from the environment (including a `.env` file when
    /// present), falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let _env = dotenvy::dotenv();

        let data_dir = env::var(DATA_DIR_ENV)
            .map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        Self {
            data_dir,
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            simulated_auth_latency: SIMULATED_AUTH_LATENCY,
        }
    }
}
