//! Single-line state file holding the last version this program recorded

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;
use tracing::{debug, info, warn};

use crate::version::dotted::DottedVersion;
use crate::version::error::StateError;

/// Trait for reading and replacing the last recorded version
#[cfg_attr(test, automock)]
pub trait VersionStore {
    /// Returns the recorded version, or `None` when nothing valid is recorded
    fn read_current(&mut self) -> Result<Option<DottedVersion>, StateError>;

    /// Replaces the recorded version
    fn write_current(&mut self, version: &DottedVersion) -> Result<(), StateError>;
}

/// File-backed [`VersionStore`]. The handle is closed when this is dropped.
pub struct StateFile {
    file: File,
    path: PathBuf,
}

impl StateFile {
    /// Opens the state file for reading and writing, creating it if absent
    pub fn open(path: &Path) -> Result<Self, StateError> {
        debug!("Opening state file at {:?}", path);

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|source| StateError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, source: std::io::Error) -> StateError {
        StateError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: std::io::Error) -> StateError {
        StateError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl VersionStore for StateFile {
    fn read_current(&mut self) -> Result<Option<DottedVersion>, StateError> {
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| self.read_error(e))?;

        let mut bytes = Vec::new();
        self.file
            .read_to_end(&mut bytes)
            .map_err(|e| self.read_error(e))?;

        // Invalid UTF-8 is malformed content, not an I/O failure
        let content = String::from_utf8_lossy(&bytes);
        let content = content.trim_matches(['\n', '\r']);

        if content.is_empty() {
            info!("State file {:?} holds no version yet", self.path);
            return Ok(None);
        }

        match DottedVersion::parse(content) {
            Ok(version) => Ok(Some(version)),
            Err(e) => {
                warn!("Ignoring malformed state file {:?}: {}", self.path, e);
                Ok(None)
            }
        }
    }

    fn write_current(&mut self, version: &DottedVersion) -> Result<(), StateError> {
        self.file.set_len(0).map_err(|e| self.write_error(e))?;
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| self.write_error(e))?;
        self.file
            .write_all(version.to_string().as_bytes())
            .map_err(|e| self.write_error(e))?;
        self.file.flush().map_err(|e| self.write_error(e))?;
        self.file.sync_data().map_err(|e| self.write_error(e))?;

        debug!("Wrote {} to {:?}", version, self.path);
        Ok(())
    }
}
