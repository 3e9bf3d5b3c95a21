//! Shared setup for integration tests

use std::path::{Path, PathBuf};

use mockito::{Mock, ServerGuard};
use tempfile::TempDir;

use browser_version_watch::config::{FetchConfig, SourceConfig, WatchConfig};

/// Path of the version endpoint on the mock server
pub const VERSION_PATH: &str = "/win";

/// Creates a temp dir with a state file path inside it, optionally pre-filled
pub fn create_state_dir(content: Option<&str>) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("version.txt");
    if let Some(content) = content {
        std::fs::write(&path, content).unwrap();
    }
    (temp_dir, path)
}

/// Registers a single expected GET on the version endpoint
pub async fn mock_version_endpoint(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
    server
        .mock("GET", VERSION_PATH)
        .with_status(status)
        .with_header("content-type", "text/plain")
        .with_body(body)
        .expect(1)
        .create_async()
        .await
}

/// Config that fetches from the mock server and records into `state_file`
pub fn http_config(server: &ServerGuard, state_file: &Path) -> WatchConfig {
    WatchConfig {
        state_file: state_file.to_path_buf(),
        fetch: FetchConfig {
            timeout_ms: 5_000,
            source: SourceConfig::Http {
                url: format!("{}{}", server.url(), VERSION_PATH),
            },
        },
    }
}

pub fn read_state(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
