//! One polling run: read the recorded version, fetch the published one, and
//! record it when it is newer

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::WatchConfig;
use crate::version::dotted::DottedVersion;
use crate::version::error::{FetchError, StateError};
use crate::version::fetcher::VersionFetcher;
use crate::version::fetchers;
use crate::version::notifier::{LogNotifier, UpdateNotifier};
use crate::version::state::{StateFile, VersionStore};

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Result of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The fetched version was written to the state file
    Updated {
        previous: Option<DottedVersion>,
        current: DottedVersion,
    },
    /// The recorded version is the same or newer; nothing was written
    Unchanged {
        current: DottedVersion,
        fetched: DottedVersion,
    },
}

/// Compare the published version against the recorded one and record it if newer.
///
/// The store is only written after a successful fetch. A notifier failure is
/// logged and does not affect the outcome.
pub async fn check_for_update<S: VersionStore>(
    store: &mut S,
    fetcher: &dyn VersionFetcher,
    notifier: &dyn UpdateNotifier,
) -> Result<CheckOutcome, CheckError> {
    let previous = store.read_current()?;
    match previous {
        Some(version) => debug!("Recorded version is {}", version),
        None => debug!("No valid version recorded yet"),
    }

    let fetched = fetcher.fetch_latest().await?;
    debug!("Published version is {}", fetched);

    match previous {
        Some(current) if !fetched.is_after(&current) => {
            return Ok(CheckOutcome::Unchanged { current, fetched });
        }
        _ => {}
    }

    store.write_current(&fetched)?;

    if let Err(e) = notifier.notify(previous, fetched).await {
        warn!("Failed to notify about version {}: {}", fetched, e);
    }

    Ok(CheckOutcome::Updated {
        previous,
        current: fetched,
    })
}

/// Run one check with the state file and fetcher described by `config`
pub async fn run(config: &WatchConfig) -> Result<CheckOutcome, CheckError> {
    let mut store = StateFile::open(&config.state_file)?;
    let fetcher = fetchers::from_config(&config.fetch)?;

    let outcome = check_for_update(&mut store, fetcher.as_ref(), &LogNotifier).await?;

    match outcome {
        // The notifier already announced the update
        CheckOutcome::Updated { current, .. } => {
            debug!("Recorded {} in {:?}", current, store.path())
        }
        CheckOutcome::Unchanged { current, fetched } => info!(
            "Unchanged: recorded {}, published {}",
            current, fetched
        ),
    }
    info!("Finished");

    Ok(outcome)
}
