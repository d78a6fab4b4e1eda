use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use super::error::SessionError;

/// Key the token is kept under in key/value stores.
pub const TOKEN_KEY: &str = "token";

/// Persistence for the session token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, SessionError>;
    fn save(&self, token: &str) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// Process-local store; the token is gone when the process exits.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        let token = self.token.read().map_err(|_| SessionError::Poisoned)?;
        Ok(token.clone())
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        let mut slot = self.token.write().map_err(|_| SessionError::Poisoned)?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut slot = self.token.write().map_err(|_| SessionError::Poisoned)?;
        *slot = None;
        Ok(())
    }
}

/// A JSON object of string keys and values on disk, the terminal
/// counterpart of browser local storage. Other keys in the file are kept.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, SessionError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(entries)?)?;
        debug!(path = %self.path.display(), "Token store written");
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.read_entries()?.remove(TOKEN_KEY))
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        let mut entries = self.read_entries()?;
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut entries = self.read_entries()?;
        if entries.remove(TOKEN_KEY).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.load().unwrap(), None);
        store.save("abc").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        FileTokenStore::new(&path).save("persisted").unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.load().unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn file_store_clear_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"theme":"dark","token":"t-1"}"#).unwrap();

        let store = FileTokenStore::new(&path);
        store.clear().unwrap();

        assert_eq!(store.load().unwrap(), None);
        let remaining: BTreeMap<String, String> = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(remaining.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn file_store_missing_file_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(FileTokenStore::new(&path).load(), Err(SessionError::Serialization(_))));
    }
}
