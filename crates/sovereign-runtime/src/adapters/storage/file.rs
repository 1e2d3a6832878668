//! File-backed KeyValueStore
//!
//! Each key maps to `<data_dir>/<key>.json`. Writes go to a temporary file
//! first and are renamed into place, so a crash mid-write leaves the previous
//! document intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sovereign::{DomainError, KeyValueStore};
use tracing::debug;

const EXTENSION: &str = "json";

/// Directory of JSON documents, one per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the data directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            DomainError::Storage(format!("Failed to create data directory {:?}: {}", dir, e))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(DomainError::Validation(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.{}", key, EXTENSION)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::storage(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension(format!("{}.tmp", EXTENSION));

        fs::write(&tmp, value).map_err(|e| DomainError::storage(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| DomainError::storage(key, e))?;

        debug!(key = %key, bytes = value.len(), "Wrote document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("sov_leaks").unwrap().is_none());
    }

    #[test]
    fn test_documents_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set("sov_revelations", r#"["one"]"#).unwrap();
            store.set("sov_revelations", r#"["two","one"]"#).unwrap();
        }

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get("sov_revelations").unwrap().as_deref(),
            Some(r#"["two","one"]"#)
        );
        assert!(dir.path().join("sov_revelations.json").exists());
        assert!(!dir.path().join("sov_revelations.json.tmp").exists());
    }

    #[test]
    fn test_creates_nested_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        store.set("sov_chest", "{}").unwrap();
        assert!(nested.join("sov_chest.json").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        for key in ["", "../escape", "a/b", "dot.key"] {
            assert!(matches!(
                store.set(key, "{}"),
                Err(DomainError::Validation(_))
            ));
        }
    }
}
