//! Fetcher that reads the version from an HTTP endpoint

use std::time::Duration;

use tracing::{debug, warn};

use crate::version::dotted::DottedVersion;
use crate::version::error::FetchError;
use crate::version::fetcher::VersionFetcher;

/// Fetcher implementation that expects the whole response body to be a version
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpFetcher {
    /// Creates a new HttpFetcher for `url`; requests are bounded by `timeout`
    pub fn new(url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent("browser-version-watch")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl VersionFetcher for HttpFetcher {
    async fn fetch_latest(&self) -> Result<DottedVersion, FetchError> {
        debug!("Fetching latest version from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Version endpoint returned status {}: {}", status, self.url);
            return Err(FetchError::UnexpectedStatus(status));
        }

        let body = response.text().await?;
        let body = body.trim_end_matches(['\n', '\r']);
        if body.is_empty() {
            return Err(FetchError::EmptyResponse);
        }

        Ok(DottedVersion::parse(body)?)
    }
}
