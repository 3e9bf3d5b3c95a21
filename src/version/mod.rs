//! Version tracking layer
//!
//! Everything needed to decide whether the published browser version moved:
//! the version value type, the local state file holding the last seen version,
//! and the fetchers that ask a remote source for the current one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │────▶│    Watch    │────▶│    State    │
//! │ (http, cmd) │     │  (compare)  │     │   (file)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │  Notifier   │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`dotted`]: Four-component version value with ordering and parsing
//! - [`error`]: Error types for parsing, state, fetch and notify operations
//! - [`fetcher`]: Fetcher trait for retrieving the current remote version
//! - [`fetchers`]: Concrete fetchers (HTTP endpoint, external command)
//! - [`notifier`]: Hook invoked after a new version was recorded
//! - [`state`]: Single-line state file storing the last seen version

pub mod dotted;
pub mod error;
pub mod fetcher;
pub mod fetchers;
pub mod notifier;
pub mod state;

pub use dotted::DottedVersion;
