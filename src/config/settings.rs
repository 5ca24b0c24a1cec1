use std::str::FromStr;

use serde::Serialize;

use crate::config::cache::ConfigCache;
use crate::config::keys;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Unknown webhook method '{0}'")]
    UnknownWebhookMethod(String),
    #[error("Unknown webhook content type '{0}'")]
    UnknownWebhookContentType(String),
}

/// HTTP method used for webhook delivery. Defaults to `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl WebhookMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl FromStr for WebhookMethod {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Err(SettingsError::UnknownWebhookMethod(other.to_string())),
        }
    }
}

/// Body encoding for webhook delivery. Defaults to `JSON`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookContentType {
    Json,
    Form,
    Text,
}

impl WebhookContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Form => "FORM",
            Self::Text => "TEXT",
        }
    }
}

impl FromStr for WebhookContentType {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "JSON" => Ok(Self::Json),
            "FORM" => Ok(Self::Form),
            "TEXT" => Ok(Self::Text),
            other => Err(SettingsError::UnknownWebhookContentType(other.to_string())),
        }
    }
}

/// Typed snapshot of the boolean flags and notification targets.
///
/// One parse step per key, taken through the cache so the whitelist
/// memoization applies. Boolean parsing is total: a flag is true only when
/// its value is case-insensitively `true`, except `RUN_HEADLESS`, which is
/// true for anything other than `false`. `ENABLE_RESPONSE_FORMAT` defaults
/// to true when unset.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub pcurl_to_mobile: bool,
    pub run_headless: bool,
    pub login_is_edge: bool,
    pub running_in_docker: bool,
    pub ai_debug_mode: bool,
    pub skip_ai_analysis: bool,
    pub enable_thinking: bool,
    pub enable_response_format: bool,
    pub webhook_enable_markdown: bool,
    pub webhook_method: WebhookMethod,
    pub webhook_content_type: WebhookContentType,
    pub ntfy_topic_url: Option<String>,
    pub gotify_url: Option<String>,
    pub gotify_token: Option<String>,
    pub bark_url: Option<String>,
    pub wx_bot_url: Option<String>,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub webhook_url: Option<String>,
    pub webhook_headers: Option<String>,
    pub webhook_query_parameters: Option<String>,
    pub webhook_body: Option<String>,
}

impl Settings {
    pub fn load(cache: &ConfigCache) -> Result<Self, SettingsError> {
        let webhook_method = match cache.get(keys::WEBHOOK_METHOD) {
            Some(raw) => raw.parse()?,
            None => WebhookMethod::Post,
        };
        let webhook_content_type = match cache.get(keys::WEBHOOK_CONTENT_TYPE) {
            Some(raw) => raw.parse()?,
            None => WebhookContentType::Json,
        };

        Ok(Self {
            pcurl_to_mobile: flag_is_true(cache, keys::PCURL_TO_MOBILE, false),
            run_headless: flag_is_not_false(cache, keys::RUN_HEADLESS),
            login_is_edge: flag_is_true(cache, keys::LOGIN_IS_EDGE, false),
            running_in_docker: flag_is_true(cache, keys::RUNNING_IN_DOCKER, false),
            ai_debug_mode: flag_is_true(cache, keys::AI_DEBUG_MODE, false),
            skip_ai_analysis: flag_is_true(cache, keys::SKIP_AI_ANALYSIS, false),
            enable_thinking: flag_is_true(cache, keys::ENABLE_THINKING, false),
            enable_response_format: flag_is_true(cache, keys::ENABLE_RESPONSE_FORMAT, true),
            webhook_enable_markdown: flag_is_true(cache, keys::WEBHOOK_ENABLE_MARKDOWN, false),
            webhook_method,
            webhook_content_type,
            ntfy_topic_url: cache.get(keys::NTFY_TOPIC_URL),
            gotify_url: cache.get(keys::GOTIFY_URL),
            gotify_token: cache.get(keys::GOTIFY_TOKEN),
            bark_url: cache.get(keys::BARK_URL),
            wx_bot_url: cache.get(keys::WX_BOT_URL),
            telegram_bot_token: cache.get(keys::TELEGRAM_BOT_TOKEN),
            telegram_chat_id: cache.get(keys::TELEGRAM_CHAT_ID),
            webhook_url: cache.get(keys::WEBHOOK_URL),
            webhook_headers: cache.get(keys::WEBHOOK_HEADERS),
            webhook_query_parameters: cache.get(keys::WEBHOOK_QUERY_PARAMETERS),
            webhook_body: cache.get(keys::WEBHOOK_BODY),
        })
    }
}

fn flag_is_true(cache: &ConfigCache, key: &str, default: bool) -> bool {
    match cache.get(key) {
        Some(value) => value.trim().eq_ignore_ascii_case("true"),
        None => default,
    }
}

fn flag_is_not_false(cache: &ConfigCache, key: &str) -> bool {
    match cache.get(key) {
        Some(value) => !value.trim().eq_ignore_ascii_case("false"),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::env::{EnvStore, MemoryEnv};

    fn cache_with(vars: &[(&str, &str)]) -> ConfigCache {
        let env = Arc::new(MemoryEnv::new());
        for (key, value) in vars {
            env.set_var(key, value);
        }
        ConfigCache::new(env)
    }

    #[test]
    fn defaults_with_empty_environment() {
        let settings = Settings::load(&cache_with(&[])).unwrap();
        assert!(settings.run_headless);
        assert!(settings.enable_response_format);
        assert!(!settings.pcurl_to_mobile);
        assert!(!settings.login_is_edge);
        assert!(!settings.running_in_docker);
        assert!(!settings.ai_debug_mode);
        assert!(!settings.skip_ai_analysis);
        assert!(!settings.enable_thinking);
        assert!(!settings.webhook_enable_markdown);
        assert_eq!(settings.webhook_method, WebhookMethod::Post);
        assert_eq!(settings.webhook_content_type, WebhookContentType::Json);
        assert_eq!(settings.ntfy_topic_url, None);
    }

    #[test]
    fn true_flags_are_case_insensitive() {
        let settings =
            Settings::load(&cache_with(&[("AI_DEBUG_MODE", "True"), ("ENABLE_THINKING", "TRUE")]))
                .unwrap();
        assert!(settings.ai_debug_mode);
        assert!(settings.enable_thinking);
    }

    #[test]
    fn non_true_values_parse_as_false() {
        let settings = Settings::load(&cache_with(&[
            ("RUNNING_IN_DOCKER", "1"),
            ("SKIP_AI_ANALYSIS", "yes"),
            ("ENABLE_RESPONSE_FORMAT", "no"),
        ]))
        .unwrap();
        assert!(!settings.running_in_docker);
        assert!(!settings.skip_ai_analysis);
        assert!(!settings.enable_response_format);
    }

    #[test]
    fn run_headless_is_true_unless_literally_false() {
        assert!(Settings::load(&cache_with(&[("RUN_HEADLESS", "anything")])).unwrap().run_headless);
        assert!(!Settings::load(&cache_with(&[("RUN_HEADLESS", "FALSE")])).unwrap().run_headless);
    }

    #[test]
    fn webhook_method_and_content_type_are_upper_cased() {
        let settings = Settings::load(&cache_with(&[
            ("WEBHOOK_METHOD", "put"),
            ("WEBHOOK_CONTENT_TYPE", "form"),
        ]))
        .unwrap();
        assert_eq!(settings.webhook_method, WebhookMethod::Put);
        assert_eq!(settings.webhook_method.as_str(), "PUT");
        assert_eq!(settings.webhook_content_type.as_str(), "FORM");
    }

    #[test]
    fn unknown_webhook_method_is_a_recoverable_error() {
        let err = Settings::load(&cache_with(&[("WEBHOOK_METHOD", "SEND")])).unwrap_err();
        assert!(matches!(err, SettingsError::UnknownWebhookMethod(_)));
    }

    #[test]
    fn notification_targets_pass_through() {
        let settings = Settings::load(&cache_with(&[
            ("TELEGRAM_CHAT_ID", "42"),
            ("WEBHOOK_URL", "https://hooks.example.com/x"),
        ]))
        .unwrap();
        assert_eq!(settings.telegram_chat_id.as_deref(), Some("42"));
        assert_eq!(
            settings.webhook_url.as_deref(),
            Some("https://hooks.example.com/x")
        );
    }
}
