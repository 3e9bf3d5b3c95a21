use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};

use browser_version_watch::config::{self, ConfigOverrides, WatchConfig};
use browser_version_watch::{logging, watch};

#[derive(Parser)]
#[command(name = "browser-version-watch")]
#[command(version, about = "Record the latest published browser version when it changes")]
struct Cli {
    /// JSON config file (default: $XDG_CONFIG_HOME/browser-version-watch/config.json if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// File holding the last recorded version
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Fetch the version from this URL
    #[arg(long, conflicts_with = "command")]
    url: Option<String>,

    /// Run this program and use the last line of its output as the version
    #[arg(long, value_name = "PROGRAM")]
    command: Option<String>,

    /// Argument passed to the --command program (repeatable)
    #[arg(long = "arg", value_name = "ARG", requires = "command", allow_hyphen_values = true)]
    args: Vec<String>,

    /// Fetch timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Write logs to a file instead of stderr (default path in the data directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<Option<PathBuf>>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            state_file: self.state_file.clone(),
            url: self.url.clone(),
            command: self.command.clone(),
            args: self.args.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .clone()
        .map(|path| path.unwrap_or_else(config::log_path));
    let _guard = logging::init(log_file.as_deref(), cli.log_json)?;

    let config = WatchConfig::resolve(
        cli.config.as_deref(),
        &config::config_path(),
        &cli.overrides(),
    )?;
    debug!("Using configuration {:?}", config);

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(watch::run(&config))
        .inspect_err(|e| error!("Version check failed: {}", e))
        .context("version check failed")?;

    Ok(())
}
