use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dockpane_plugin::SessionStore;

/// File-backed session store holding a flat JSON object of string values.
/// Writes flush straight through; the in-memory view stays authoritative if
/// a flush fails.
pub struct JsonFileStore {
    path: PathBuf,
    values: serde_json::Map<String, serde_json::Value>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing, unreadable, or corrupt file
    /// yields an empty session.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<serde_json::Value>(&raw).ok())
            .and_then(|value| match value {
                serde_json::Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default();
        Self { path, values }
    }

    /// Default store location for a session under the platform data
    /// directory.
    pub fn default_path(session_id: &str) -> Option<PathBuf> {
        Some(
            dirs::data_local_dir()?
                .join("dockpane")
                .join(format!("{session_id}-session.json")),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&serde_json::Value::Object(self.values.clone()))
            .map_err(io::Error::other)?;
        fs::write(&self.path, raw)
    }
}

impl SessionStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(|value| value.as_str())
            .map(|s| s.to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(
            key.to_string(),
            serde_json::Value::String(value.to_string()),
        );
        if let Err(e) = self.flush() {
            tracing::warn!("failed to persist session store {:?}: {}", self.path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn values_survive_reopening() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get("iframeMinimized"), None);
        store.set("iframeMinimized", "true");

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("iframeMinimized").as_deref(), Some("true"));
    }

    #[test]
    fn corrupt_file_yields_empty_session() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("iframeMinimized"), None);
    }

    #[test]
    fn non_object_file_yields_empty_session() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("iframeMinimized"), None);
    }

    #[test]
    fn non_string_values_read_as_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"iframeMinimized": true}"#).unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("iframeMinimized"), None);
    }

    #[test]
    fn open_creates_parent_directories_on_first_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut store = JsonFileStore::open(&path);
        store.set("iframeMinimized", "false");
        assert!(path.exists());
    }
}
