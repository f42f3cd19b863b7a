use super::*;
use jobtrack_core::{AuthScheme, Profile, SessionStore};

fn profile() -> Profile {
    Profile {
        id: 2,
        email: "lin@example.com".to_owned(),
        role: "USER".to_owned(),
    }
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::in_dir(dir.path());
    assert!(storage.get_item("token").is_none());
}

#[test]
fn session_survives_reopening_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = SessionStore::new(AuthScheme::Bearer, FileStorage::in_dir(dir.path()));
    first.save("tok-9", &profile()).expect("save");

    let reopened = SessionStore::new(AuthScheme::Bearer, FileStorage::in_dir(dir.path()));
    assert_eq!(reopened.current_artifact().as_deref(), Some("tok-9"));
    assert_eq!(reopened.current_profile(), Some(profile()));
}

#[test]
fn clearing_session_removes_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::in_dir(dir.path());
    let session = SessionStore::new(AuthScheme::Basic, storage.clone());
    session.save("Y3JlZHM=", &profile()).expect("save");
    assert!(storage.path().exists());

    session.clear();
    session.clear();

    assert!(!storage.path().exists());
    assert!(session.current_artifact().is_none());
}

#[test]
fn corrupt_file_reads_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::in_dir(dir.path());
    fs::write(storage.path(), "not json").expect("write");
    assert!(storage.get_item("user").is_none());
}

#[test]
fn write_creates_missing_config_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::in_dir(&dir.path().join("nested").join("jobtrack"));
    storage.set_item("token", "abc").expect("set");
    assert_eq!(storage.get_item("token").as_deref(), Some("abc"));
}

#[cfg(unix)]
#[test]
fn session_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::in_dir(dir.path());
    storage.set_item("token", "abc").expect("set");
    let mode = fs::metadata(storage.path()).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn explicit_config_dir_wins() {
    let dir = PathBuf::from("/tmp/jobtrack-test");
    assert_eq!(config_dir(Some(dir.clone())).expect("dir"), dir);
}
