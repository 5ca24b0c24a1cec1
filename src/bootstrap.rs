use std::sync::Arc;

use crate::ai::AiClientManager;
use crate::config::mask::mask;
use crate::config::settings::SettingsError;
use crate::config::{ConfigCache, Settings, keys};
use crate::env::EnvStore;

/// The wired-together configuration subsystem, built once at process start
/// and handed to collaborators by reference. No ambient singletons.
pub struct Bootstrapped {
    pub cache: Arc<ConfigCache>,
    pub settings: Settings,
    pub ai: Arc<AiClientManager>,
}

/// One-time startup sequence.
///
/// Reads every whitelisted key once so the cache is warm, parses the typed
/// settings snapshot, and initializes the AI client only when the base URL
/// and model name are both present — an incomplete base configuration skips
/// `init` entirely, so neither the proxy nor a construction attempt
/// happens. Finishes by logging a masked summary of everything cached.
pub fn bootstrap(env: Arc<dyn EnvStore>) -> Result<Bootstrapped, SettingsError> {
    let cache = Arc::new(ConfigCache::new(env));

    for key in keys::WHITELIST {
        cache.get(key);
    }

    let settings = Settings::load(&cache)?;
    let ai = Arc::new(AiClientManager::new(Arc::clone(&cache)));

    let base_url = cache.get(keys::OPENAI_BASE_URL).unwrap_or_default();
    let model_name = cache.get(keys::OPENAI_MODEL_NAME).unwrap_or_default();
    if base_url.is_empty() || model_name.is_empty() {
        tracing::warn!(
            event = "ai_client_disabled",
            "OPENAI_BASE_URL and OPENAI_MODEL_NAME are not fully configured; AI features are unavailable"
        );
    } else {
        ai.init();
    }

    let mut cached: Vec<(String, String)> = cache.snapshot().into_iter().collect();
    cached.sort();
    for (key, value) in cached {
        tracing::info!(
            event = "config_loaded",
            key = %key,
            value = %mask(&key, &value),
            "configuration value loaded"
        );
    }

    Ok(Bootstrapped { cache, settings, ai })
}
