use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Defaults
// =============================================================================

/// State file used when none is configured, relative to the working directory
pub const DEFAULT_STATE_FILE: &str = "version.txt";

/// Endpoint publishing the current stable browser version as plain text
pub const DEFAULT_VERSION_URL: &str = "https://omahaproxy.appspot.com/win";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 30_000;

const APP_NAME: &str = "browser-version-watch";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Watcher configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WatchConfig {
    /// File holding the last recorded version
    pub state_file: PathBuf,
    pub fetch: FetchConfig,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            fetch: FetchConfig::default(),
        }
    }
}

impl WatchConfig {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the effective configuration: defaults, then a config file, then
    /// command-line overrides.
    ///
    /// An explicit `config_file` must exist. Otherwise `default_config_file` is
    /// read only when it is present.
    pub fn resolve(
        config_file: Option<&Path>,
        default_config_file: &Path,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_file {
            Some(path) => Self::load(path)?,
            None if default_config_file.is_file() => Self::load(default_config_file)?,
            None => Self::default(),
        };

        config.apply(overrides);
        Ok(config)
    }

    /// Replaces every field that `overrides` sets
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(state_file) = &overrides.state_file {
            self.state_file = state_file.clone();
        }
        if let Some(url) = &overrides.url {
            self.fetch.source = SourceConfig::Http { url: url.clone() };
        }
        if let Some(program) = &overrides.command {
            self.fetch.source = SourceConfig::Command {
                program: program.clone(),
                args: overrides.args.clone(),
            };
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.fetch.timeout_ms = timeout_ms;
        }
    }
}

/// Settings given on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub state_file: Option<PathBuf>,
    pub url: Option<String>,
    /// Helper program; `args` are only used together with it
    pub command: Option<String>,
    pub args: Vec<String>,
    pub timeout_ms: Option<u64>,
}

/// Fetch-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchConfig {
    /// Upper bound for one fetch in milliseconds
    pub timeout_ms: u64,
    pub source: SourceConfig,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            source: SourceConfig::default(),
        }
    }
}

/// Where the current version comes from
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SourceConfig {
    /// GET `url`; the response body is the version
    Http { url: String },
    /// Run `program args...`; the last non-empty output line is the version
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Http {
            url: DEFAULT_VERSION_URL.to_string(),
        }
    }
}

/// Returns the path to the config directory for browser-version-watch.
/// Uses $XDG_CONFIG_HOME/browser-version-watch if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/browser-version-watch,
/// or ./browser-version-watch if neither is available.
pub fn config_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the data directory for browser-version-watch.
/// Uses $XDG_DATA_HOME/browser-version-watch if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/browser-version-watch,
/// or ./browser-version-watch if neither is available.
pub fn data_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(format!("{APP_NAME}.log"))
}

fn app_dir_with_env(
    xdg_dir: Option<String>,
    home_dir: Option<PathBuf>,
    home_fallback: &str,
) -> PathBuf {
    let base = xdg_dir
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_fallback)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_NAME)
}
