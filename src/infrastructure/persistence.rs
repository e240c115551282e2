use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::domain::{AccessFlags, DocumentProvider, ResourceHandle, SettingsStore, StoreError, StoreResult};

/// Settings kept as a flat JSON object on disk, rewritten on every `put`.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileSettingsStore {
    /// Loads the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| StoreError::Settings(format!("Invalid settings file {} - {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::Settings(e.to_string())),
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Settings(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| StoreError::Settings(format!("Serialization failed: {}", e)))?;
        fs::write(&self.path, json).map_err(|e| StoreError::Settings(e.to_string()))
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Document provider backed by the local filesystem, issuing `file://` handles.
#[derive(Debug, Default)]
pub struct FsDocumentProvider;

impl FsDocumentProvider {
    fn resolve(handle: &ResourceHandle) -> StoreResult<PathBuf> {
        handle
            .to_path()
            .ok_or_else(|| StoreError::ResourceNotFound(handle.clone()))
    }
}

impl DocumentProvider for FsDocumentProvider {
    fn open_read(&mut self, handle: &ResourceHandle) -> StoreResult<Box<dyn Read>> {
        let path = Self::resolve(handle)?;
        let file = File::open(&path).map_err(|e| StoreError::from_io(handle, e))?;
        Ok(Box::new(file))
    }

    fn open_write(&mut self, handle: &ResourceHandle) -> StoreResult<Box<dyn Write>> {
        let path = Self::resolve(handle)?;
        // Documents are created by the picker, never here.
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| StoreError::from_io(handle, e))?;
        Ok(Box::new(file))
    }

    fn take_persistable_permission(&mut self, handle: &ResourceHandle, flags: AccessFlags) {
        // Local paths stay reachable across restarts; nothing to grant.
        tracing::debug!(handle = %handle, read = flags.read, write = flags.write, "persistable permission taken");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileSettingsStore::open(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.get("pref_uri"), None);
    }

    #[test]
    fn test_settings_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = FileSettingsStore::open(&path).unwrap();
        store.put("pref_uri", "file:///a.txt").unwrap();
        store.put("pref_uri", "file:///b.txt").unwrap();

        let reopened = FileSettingsStore::open(&path).unwrap();
        assert_eq!(reopened.get("pref_uri"), Some("file:///b.txt".to_string()));
    }

    #[test]
    fn test_corrupt_settings_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(FileSettingsStore::open(&path), Err(StoreError::Settings(_))));
    }

    #[test]
    fn test_open_read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let handle = ResourceHandle::from_path(&dir.path().join("gone.txt")).unwrap();
        let mut provider = FsDocumentProvider;
        assert!(matches!(provider.open_read(&handle), Err(StoreError::ResourceNotFound(_))));
    }

    #[test]
    fn test_unknown_scheme_is_not_found() {
        let handle = ResourceHandle::new("content://provider/document/7");
        let mut provider = FsDocumentProvider;
        assert!(matches!(provider.open_write(&handle), Err(StoreError::ResourceNotFound(_))));
    }

    #[test]
    fn test_open_write_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.txt");
        fs::write(&path, "a much longer previous content").unwrap();
        let handle = ResourceHandle::from_path(&path).unwrap();

        let mut provider = FsDocumentProvider;
        {
            let mut writer = provider.open_write(&handle).unwrap();
            writer.write_all(b"short").unwrap();
        }

        let mut content = String::new();
        provider.open_read(&handle).unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "short");
    }
}
