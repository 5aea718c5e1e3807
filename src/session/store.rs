//! On-disk session persistence.

use crate::session::UserIdentity;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Persists the signed-in identity between invocations.
///
/// The session is a single line of text (the email address) in a file
/// under the configuration directory. `login` writes it, `logout` removes
/// it, everything else reads it through the session gate.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store rooted at the given configuration directory.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: config_dir.into().join("session"),
        }
    }

    /// Returns the path of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored identity, if a session exists.
    ///
    /// A missing file means no session. A file that does not parse as an
    /// identity is an error; the user should log in again.
    pub fn load(&self) -> Result<Option<UserIdentity>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read session file: {}", self.path.display()))?;

        let identity = contents
            .trim()
            .parse()
            .with_context(|| format!("corrupt session file: {}", self.path.display()))?;

        Ok(Some(identity))
    }

    /// Persists the given identity, replacing any existing session.
    pub fn save(&self, identity: &UserIdentity) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        std::fs::write(&self.path, format!("{}\n", identity))
            .with_context(|| format!("failed to write session file: {}", self.path.display()))
    }

    /// Removes the stored session.
    ///
    /// Returns whether a session existed.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&self.path)
            .with_context(|| format!("failed to remove session file: {}", self.path.display()))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn identity() -> UserIdentity {
        "user@example.com".parse().unwrap()
    }

    #[test]
    fn load_without_session_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        store.save(&identity()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, identity());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("config");
        let store = SessionStore::new(&nested);

        store.save(&identity()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn save_replaces_previous_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        store.save(&identity()).unwrap();
        let other: UserIdentity = "other@example.com".parse().unwrap();
        store.save(&other).unwrap();

        assert_eq!(store.load().unwrap().unwrap(), other);
    }

    #[test]
    fn clear_removes_the_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        store.save(&identity()).unwrap();
        assert!(store.clear().unwrap());
        assert!(store.load().unwrap().is_none());

        // Clearing again reports that nothing was stored.
        assert!(!store.clear().unwrap());
    }

    #[test]
    fn corrupt_session_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        std::fs::write(store.path(), "not an email\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("corrupt session file"));
    }
}
