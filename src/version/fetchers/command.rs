//! Fetcher that delegates retrieval to an external helper command
//!
//! Helpers such as `curl -v` print progress or diagnostics before the actual
//! answer, so only the last non-empty line of their output is parsed.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::version::dotted::DottedVersion;
use crate::version::error::FetchError;
use crate::version::fetcher::VersionFetcher;

/// Fetcher implementation that runs `program args...` and parses its output
#[derive(Debug, Clone)]
pub struct CommandFetcher {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandFetcher {
    pub fn new(program: &str, args: &[String], timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            args: args.to_vec(),
            timeout,
        }
    }
}

/// Returns the last line of `output` that is not blank, trimmed
fn last_non_empty_line(output: &str) -> Option<&str> {
    output
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
}

#[async_trait::async_trait]
impl VersionFetcher for CommandFetcher {
    async fn fetch_latest(&self) -> Result<DottedVersion, FetchError> {
        debug!("Running {} {:?}", self.program, self.args);

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| FetchError::Timeout {
                program: self.program.clone(),
                timeout: self.timeout,
            })?
            .map_err(|source| FetchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            warn!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(FetchError::ProcessFailed {
                program: self.program.clone(),
                status: output.status,
            });
        }

        // stderr first so that a result printed on stdout ends up last
        let mut combined = String::from_utf8_lossy(&output.stderr).into_owned();
        combined.push('\n');
        combined.push_str(&String::from_utf8_lossy(&output.stdout));

        let line = last_non_empty_line(&combined).ok_or(FetchError::EmptyResponse)?;
        debug!("{} reported {:?}", self.program, line);

        Ok(DottedVersion::parse(line)?)
    }
}
