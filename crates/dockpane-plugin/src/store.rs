use std::collections::HashMap;

/// Session-scoped key-value persistence. Entries survive page reloads within
/// a session but not new sessions; what counts as a session is the host's
/// call.
pub trait SessionStore: Send {
    /// Look up the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for hosts without session persistence and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("iframeMinimized"), None);

        store.set("iframeMinimized", "true");
        assert_eq!(store.get("iframeMinimized").as_deref(), Some("true"));

        store.set("iframeMinimized", "false");
        assert_eq!(store.get("iframeMinimized").as_deref(), Some("false"));
    }
}
