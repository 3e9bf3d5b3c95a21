use tempfile::TempDir;

use browser_version_watch::version::DottedVersion;
use browser_version_watch::version::state::{StateFile, VersionStore};

#[test]
fn empty_state_file_has_no_prior_version() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("version.txt");
    std::fs::write(&path, "").unwrap();

    let mut state = StateFile::open(&path).unwrap();

    assert_eq!(state.read_current().unwrap(), None);
}

#[test]
fn written_version_survives_reopening() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("version.txt");

    {
        let mut state = StateFile::open(&path).unwrap();
        state
            .write_current(&DottedVersion::new(102, 0, 5005, 61))
            .unwrap();
    }

    let mut reopened = StateFile::open(&path).unwrap();
    assert_eq!(
        reopened.read_current().unwrap(),
        Some(DottedVersion::new(102, 0, 5005, 61))
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "102.0.5005.61");
}

#[test]
fn shorter_version_fully_replaces_longer_one() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("version.txt");
    let mut state = StateFile::open(&path).unwrap();

    state
        .write_current(&DottedVersion::new(102, 0, 5005, 61))
        .unwrap();
    state.write_current(&DottedVersion::new(1, 0, 0, 0)).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1.0.0.0");
    assert_eq!(
        state.read_current().unwrap(),
        Some(DottedVersion::new(1, 0, 0, 0))
    );
}
