//! Fetcher implementations for retrieving the current browser version

pub mod command;
pub mod http;

pub use command::CommandFetcher;
pub use http::HttpFetcher;

use std::time::Duration;

use crate::config::{FetchConfig, SourceConfig};
use crate::version::error::FetchError;
use crate::version::fetcher::VersionFetcher;

/// Builds the fetcher selected by `config`
pub fn from_config(config: &FetchConfig) -> Result<Box<dyn VersionFetcher>, FetchError> {
    let timeout = Duration::from_millis(config.timeout_ms);

    let fetcher: Box<dyn VersionFetcher> = match &config.source {
        SourceConfig::Http { url } => Box::new(HttpFetcher::new(url, timeout)?),
        SourceConfig::Command { program, args } => {
            Box::new(CommandFetcher::new(program, args, timeout))
        }
    };

    Ok(fetcher)
}
