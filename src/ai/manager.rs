use std::sync::{Arc, RwLock};

use async_openai::Client;
use async_openai::config::OpenAIConfig;

use crate::config::ConfigCache;
use crate::config::keys;
use crate::config::mask::mask;

#[derive(Debug, thiserror::Error)]
pub enum AiClientError {
    #[error(
        "OPENAI_BASE_URL and OPENAI_MODEL_NAME must both be set (OPENAI_API_KEY is optional for some services)"
    )]
    MissingBaseConfig,
    #[error("Invalid proxy url '{0}': {1}")]
    InvalidProxy(String, String),
    #[error("Failed to construct AI client: {0}")]
    Construction(String),
}

/// Outcome of an [`AiClientManager::init`] call. `init` always lands in
/// exactly one of these; there is no partial update.
#[derive(Debug)]
pub enum InitOutcome {
    Ready,
    Disabled(AiClientError),
}

impl InitOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Opaque bundle around one initialized AI API client.
///
/// Never mutated in place: a configuration change always produces a
/// wholesale replacement through [`AiClientManager::init`].
#[derive(Debug, Clone)]
pub struct AiHandle {
    client: Client<OpenAIConfig>,
    model_name: String,
    base_url: String,
}

impl AiHandle {
    pub fn client(&self) -> &Client<OpenAIConfig> {
        &self.client
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Owns the single live AI client handle and rebuilds it from the current
/// configuration on demand.
///
/// Replacement is a single slot write, so a concurrent
/// [`current_handle`](Self::current_handle) observes either the old or the
/// new handle, never a partially constructed one. `update` on the cache
/// followed by `init` must be serialized externally.
pub struct AiClientManager {
    cache: Arc<ConfigCache>,
    handle: RwLock<Option<Arc<AiHandle>>>,
    proxy: RwLock<Option<String>>,
}

impl AiClientManager {
    pub fn new(cache: Arc<ConfigCache>) -> Self {
        Self {
            cache,
            handle: RwLock::new(None),
            proxy: RwLock::new(None),
        }
    }

    /// Initialize or re-initialize the AI client from the current
    /// configuration. Idempotent; fully supersedes any prior state without
    /// diffing old against new settings.
    pub fn init(&self) -> InitOutcome {
        let api_key = self.cache.get(keys::OPENAI_API_KEY).unwrap_or_default();
        let base_url = self.cache.get(keys::OPENAI_BASE_URL).unwrap_or_default();
        let model_name = self.cache.get(keys::OPENAI_MODEL_NAME).unwrap_or_default();
        let proxy_url = self
            .cache
            .get(keys::PROXY_URL)
            .filter(|value| !value.is_empty());

        if base_url.is_empty() || model_name.is_empty() {
            // Proxy state is deliberately left untouched on this path.
            tracing::warn!(
                event = "ai_client_disabled",
                "OPENAI_BASE_URL and OPENAI_MODEL_NAME are not fully configured; AI features are unavailable"
            );
            self.store_handle(None);
            return InitOutcome::Disabled(AiClientError::MissingBaseConfig);
        }

        // Record the proxy for this attempt whether or not construction
        // succeeds; it is what the next request transport would use.
        if let Ok(mut proxy) = self.proxy.write() {
            *proxy = proxy_url.clone();
        }

        match build_handle(&api_key, &base_url, &model_name, proxy_url.as_deref()) {
            Ok(handle) => {
                self.store_handle(Some(Arc::new(handle)));
                tracing::info!(
                    event = "ai_client_ready",
                    base_url = %base_url,
                    model_name = %model_name,
                    api_key = %mask(keys::OPENAI_API_KEY, &api_key),
                    "AI client initialized"
                );
                InitOutcome::Ready
            }
            Err(err) => {
                tracing::warn!(
                    event = "ai_client_init_failed",
                    error = %err,
                    "failed to initialize AI client"
                );
                self.store_handle(None);
                InitOutcome::Disabled(err)
            }
        }
    }

    /// The live handle, if any. Absent means "AI features unavailable";
    /// callers degrade gracefully rather than treating it as an error.
    pub fn current_handle(&self) -> Option<Arc<AiHandle>> {
        self.handle.read().ok()?.clone()
    }

    /// The live handle, or a hard error for the one entry point that treats
    /// incomplete base configuration as fatal.
    pub fn require_handle(&self) -> Result<Arc<AiHandle>, AiClientError> {
        self.current_handle()
            .ok_or(AiClientError::MissingBaseConfig)
    }

    /// Proxy URL used by the most recent `init` attempt, if one was set.
    pub fn active_proxy(&self) -> Option<String> {
        self.proxy.read().ok()?.clone()
    }

    fn store_handle(&self, handle: Option<Arc<AiHandle>>) {
        if let Ok(mut slot) = self.handle.write() {
            *slot = handle;
        }
    }
}

fn build_handle(
    api_key: &str,
    base_url: &str,
    model_name: &str,
    proxy_url: Option<&str>,
) -> Result<AiHandle, AiClientError> {
    let mut config = OpenAIConfig::new().with_api_base(base_url);
    if !api_key.is_empty() {
        config = config.with_api_key(api_key);
    }

    let client = match proxy_url {
        Some(url) => {
            tracing::info!(event = "ai_client_proxy", proxy_url = %url, "routing AI requests through HTTP/S proxy");
            let proxy = reqwest::Proxy::all(url)
                .map_err(|err| AiClientError::InvalidProxy(url.to_string(), err.to_string()))?;
            let http_client = reqwest::Client::builder()
                .proxy(proxy)
                .build()
                .map_err(|err| AiClientError::Construction(err.to_string()))?;
            Client::build(http_client, config, backoff::ExponentialBackoff::default())
        }
        None => Client::with_config(config),
    };

    Ok(AiHandle {
        client,
        model_name: model_name.to_string(),
        base_url: base_url.to_string(),
    })
}
