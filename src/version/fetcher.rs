//! Fetcher trait for retrieving the currently published version

#[cfg(test)]
use mockall::automock;

use crate::version::dotted::DottedVersion;
use crate::version::error::FetchError;

/// Trait for asking a remote source which browser version is current
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionFetcher: Send + Sync {
    /// Fetches the current version from the remote source
    ///
    /// # Returns
    /// * `Ok(DottedVersion)` - The version the source currently publishes
    /// * `Err(FetchError)` - If the transport fails or the answer is not a valid version
    async fn fetch_latest(&self) -> Result<DottedVersion, FetchError>;
}
