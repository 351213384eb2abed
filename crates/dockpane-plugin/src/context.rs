use std::sync::{Arc, Mutex};

use crate::store::SessionStore;

/// Severities understood by host log sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Host-provided logging endpoint.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

/// Capabilities the host hands to an extension: a log sink and the
/// session-scoped key-value store. Cheap to clone; clones share the same
/// sink and store.
#[derive(Clone)]
pub struct Context {
    log: Arc<dyn LogSink>,
    store: Arc<Mutex<Box<dyn SessionStore>>>,
}

impl Context {
    pub fn new<L, S>(log: L, store: S) -> Self
    where
        L: LogSink + 'static,
        S: SessionStore + 'static,
    {
        let store: Box<dyn SessionStore> = Box::new(store);
        Self {
            log: Arc::new(log),
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn trace(&self, message: &str) {
        self.log.log(LogLevel::Trace, message);
    }

    pub fn debug(&self, message: &str) {
        self.log.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log.log(LogLevel::Error, message);
    }

    /// Read a value from the session store. `None` when the key is absent or
    /// the store is unavailable.
    pub fn session_get(&self, key: &str) -> Option<String> {
        self.store.lock().ok().and_then(|store| store.get(key))
    }

    /// Write a value to the session store.
    pub fn session_set(&self, key: &str, value: &str) {
        if let Ok(mut store) = self.store.lock() {
            store.set(key, value);
        }
    }
}
