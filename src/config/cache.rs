use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::config::keys;
use crate::env::EnvStore;

/// Whitelist-gated memoization layer over the environment store.
///
/// The environment store stays authoritative; the cache is a performance
/// shadow that can be cleared and rebuilt at any time. Only keys on
/// [`keys::WHITELIST`] are ever held here, and only non-empty values are
/// persisted on the read path. Concurrent `get`s may race to populate an
/// entry, which is harmless; `update`/`clear` are not atomic against
/// readers and must be serialized by the caller together with any client
/// re-initialization that follows.
pub struct ConfigCache {
    env: Arc<dyn EnvStore>,
    cached: RwLock<HashMap<String, String>>,
}

impl ConfigCache {
    pub fn new(env: Arc<dyn EnvStore>) -> Self {
        Self {
            env,
            cached: RwLock::new(HashMap::new()),
        }
    }

    pub fn env(&self) -> &Arc<dyn EnvStore> {
        &self.env
    }

    /// Resolve a configuration value, memoizing whitelisted hits.
    pub fn get(&self, key: &str) -> Option<String> {
        self.get_or(key, None)
    }

    /// Resolve a configuration value with a fallback default.
    ///
    /// Non-whitelisted keys read through to the environment store and are
    /// never cached. Whitelisted keys return the cached value when present;
    /// otherwise the environment store (or the default) is consulted and the
    /// result is cached only when non-empty.
    pub fn get_or(&self, key: &str, default: Option<&str>) -> Option<String> {
        if !keys::is_whitelisted(key) {
            return self.env.var(key).or_else(|| default.map(str::to_string));
        }

        if let Ok(cached) = self.cached.read()
            && let Some(value) = cached.get(key)
        {
            return Some(value.clone());
        }

        let value = self.env.var(key).or_else(|| default.map(str::to_string));
        if let Some(resolved) = value.as_deref()
            && !resolved.is_empty()
            && let Ok(mut cached) = self.cached.write()
        {
            cached.insert(key.to_string(), resolved.to_string());
            tracing::debug!(event = "config_cached", key = %key, "cached value from environment store");
        }
        value
    }

    /// Apply live configuration changes.
    ///
    /// Entries outside the whitelist are dropped silently. A non-empty value
    /// is written to both the cache and the environment store; an empty
    /// value is a full deletion from both, so a cleared setting reads back
    /// exactly like one that was never set.
    pub fn update(&self, settings: &HashMap<String, String>) {
        let Ok(mut cached) = self.cached.write() else {
            return;
        };
        for (key, value) in settings {
            if !keys::is_whitelisted(key) {
                tracing::debug!(event = "config_update_dropped", key = %key, "ignoring non-whitelisted key");
                continue;
            }
            if value.is_empty() {
                cached.remove(key);
                self.env.remove_var(key);
            } else {
                cached.insert(key.clone(), value.clone());
                self.env.set_var(key, value);
            }
        }
    }

    /// Drop every cached entry; later `get`s repopulate lazily from the
    /// environment store.
    pub fn clear(&self) {
        if let Ok(mut cached) = self.cached.write() {
            cached.clear();
        }
    }

    /// Copy of the current cache contents, for inspection and logging.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.cached
            .read()
            .map(|cached| cached.clone())
            .unwrap_or_default()
    }
}
