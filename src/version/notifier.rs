//! Hook invoked after a newer version has been recorded

#[cfg(test)]
use mockall::automock;
use tracing::info;

use crate::version::dotted::DottedVersion;
use crate::version::error::NotifyError;

/// Trait for announcing that a newer version was recorded.
///
/// Called only after the state file has been rewritten. A failure is reported
/// to the caller but never undoes the write.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait UpdateNotifier: Send + Sync {
    async fn notify(
        &self,
        previous: Option<DottedVersion>,
        current: DottedVersion,
    ) -> Result<(), NotifyError>;
}

/// Notifier that only writes the update to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl UpdateNotifier for LogNotifier {
    async fn notify(
        &self,
        previous: Option<DottedVersion>,
        current: DottedVersion,
    ) -> Result<(), NotifyError> {
        match previous {
            Some(previous) => info!("New browser version released: {} -> {}", previous, current),
            None => info!("Recorded initial browser version {}", current),
        }
        Ok(())
    }
}
