//! File-backed durable storage for the CLI session.
//!
//! DESIGN
//! ======
//! All keys live in one JSON object file. Every write rewrites the whole file
//! through a temp file + rename so a crash never leaves a torn session. A
//! missing or unreadable file reads as empty.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jobtrack_core::{KeyValueStorage, StorageError};

/// Name of the session file inside the config directory.
pub const SESSION_FILE: &str = "session.json";

/// Resolve the config directory: explicit override, else `$HOME/.config/jobtrack`.
pub fn config_dir(explicit: Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    let home = std::env::var_os("HOME")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "HOME environment variable not set"))?;
    Ok(PathBuf::from(home).join(".config").join("jobtrack"))
}

#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at `<dir>/session.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), "ignoring unreadable session file: {e}");
            BTreeMap::new()
        })
    }

    fn store(&self, items: &BTreeMap<String, String>) -> io::Result<()> {
        if items.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            };
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(items).map_err(io::Error::other)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        restrict_permissions(&tmp)?;
        fs::rename(&tmp, &self.path)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.load();
        items.insert(key.to_owned(), value.to_owned());
        self.store(&items).map_err(|e| StorageError::Write(e.to_string()))
    }

    fn remove_item(&self, key: &str) {
        let mut items = self.load();
        if items.remove(key).is_none() {
            return;
        }
        if let Err(e) = self.store(&items) {
            tracing::warn!(path = %self.path.display(), "failed to remove `{key}` from session file: {e}");
        }
    }
}
