use std::collections::HashMap;
use std::sync::Mutex;

/// Process-wide key/value store backing all runtime configuration.
///
/// The store is the system of record; [`crate::config::ConfigCache`] is only
/// a memoization layer on top of it. Implementations are injected as
/// `Arc<dyn EnvStore>` so collaborators never reach for ambient globals and
/// tests can run against an isolated in-memory store.
pub trait EnvStore: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
    fn set_var(&self, key: &str, value: &str);
    fn remove_var(&self, key: &str);
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvStore for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set_var(&self, key: &str, value: &str) {
        // SAFETY: configuration updates are funneled through a single
        // administrative task; no other thread mutates the environment
        // concurrently.
        unsafe { std::env::set_var(key, value) };
    }

    fn remove_var(&self, key: &str) {
        // SAFETY: same single-writer discipline as `set_var`.
        unsafe { std::env::remove_var(key) };
    }
}

/// In-memory store for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: Mutex<HashMap<String, String>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EnvStore for MemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.lock().ok()?.get(key).cloned()
    }

    fn set_var(&self, key: &str, value: &str) {
        if let Ok(mut vars) = self.vars.lock() {
            vars.insert(key.to_string(), value.to_string());
        }
    }

    fn remove_var(&self, key: &str) {
        if let Ok(mut vars) = self.vars.lock() {
            vars.remove(key);
        }
    }
}
