//! Persistent session storage.
//!
//! Holds exactly two entries on disk, the bearer token and the role string,
//! as separate files under the configured data directory. The store is the
//! sole owner of the persisted pair; everything else reads through a handle
//! on demand and never keeps a copy.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

/// File name of the persisted bearer token.
const TOKEN_FILE: &str = "auth_token";

/// File name of the persisted role string.
const ROLE_FILE: &str = "user_role";

/// Errors raised while persisting the session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for session storage operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// The persisted token/role pair, as returned by [`SessionStore::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    /// Bearer token exactly as the backend issued it.
    pub token: String,
    /// Role string exactly as the backend issued it; `None` when the role
    /// entry is missing even though a token is present.
    pub role: Option<String>,
}

/// File-backed session store.
///
/// Operations are synchronous and unshared; the console runs them one at a
/// time, so no locking is needed.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Open a store rooted at `dir`. The directory is created lazily on the
    /// first write.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persist both entries, replacing whatever was stored before.
    pub fn set(&self, token: &str, role: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(TOKEN_FILE), token)?;
        fs::write(self.dir.join(ROLE_FILE), role)?;
        debug!(role, "session persisted");
        Ok(())
    }

    /// The stored pair, or `None` when no token entry exists.
    pub fn get(&self) -> Option<StoredSession> {
        let token = self.token()?;
        Some(StoredSession {
            token,
            role: self.role(),
        })
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Option<String> {
        read_entry(self.dir.join(TOKEN_FILE))
    }

    /// The stored role string, if any.
    pub fn role(&self) -> Option<String> {
        read_entry(self.dir.join(ROLE_FILE))
    }

    /// Remove both entries. Safe to call when nothing is stored.
    pub fn clear(&self) -> Result<()> {
        remove_entry(self.dir.join(TOKEN_FILE))?;
        remove_entry(self.dir.join(ROLE_FILE))?;
        debug!("session cleared");
        Ok(())
    }
}

/// Read a single entry, treating a missing or empty file as absent.
fn read_entry(path: PathBuf) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Remove a single entry, treating a missing file as already removed.
fn remove_entry(path: PathBuf) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (SessionStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        (SessionStore::open(dir.path()), dir)
    }

    #[test]
    fn get_returns_none_when_empty() {
        let (store, _dir) = temp_store();
        assert!(store.get().is_none());
        assert!(store.token().is_none());
        assert!(store.role().is_none());
    }

    #[test]
    fn set_and_get_roundtrip() {
        let (store, _dir) = temp_store();
        store.set("tok.en.value", "ROLE_TEACHER").expect("set");
        let session = store.get().expect("stored session");
        assert_eq!(session.token, "tok.en.value");
        assert_eq!(session.role.as_deref(), Some("ROLE_TEACHER"));
    }

    #[test]
    fn set_replaces_previous_pair() {
        let (store, _dir) = temp_store();
        store.set("first", "ROLE_ADMIN").expect("set");
        store.set("second", "ROLE_PARENT").expect("set");
        let session = store.get().expect("stored session");
        assert_eq!(session.token, "second");
        assert_eq!(session.role.as_deref(), Some("ROLE_PARENT"));
    }

    #[test]
    fn clear_removes_both_entries() {
        let (store, _dir) = temp_store();
        store.set("tok", "ROLE_STUDENT").expect("set");
        store.clear().expect("clear");
        assert!(store.get().is_none());
        assert!(store.role().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let (store, _dir) = temp_store();
        store.set("tok", "ROLE_STUDENT").expect("set");
        store.clear().expect("first clear");
        store.clear().expect("second clear");
        assert!(store.get().is_none());
    }

    #[test]
    fn token_without_role_entry_is_still_a_session() {
        let (store, dir) = temp_store();
        std::fs::write(dir.path().join("auth_token"), "tok").expect("write");
        let session = store.get().expect("stored session");
        assert_eq!(session.token, "tok");
        assert!(session.role.is_none());
    }

    #[test]
    fn empty_token_file_counts_as_absent() {
        let (store, dir) = temp_store();
        std::fs::write(dir.path().join("auth_token"), "").expect("write");
        assert!(store.get().is_none());
    }
}
