//! Configuration key names, the caching whitelist, and secret classification.

// AI connection settings.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const OPENAI_MODEL_NAME: &str = "OPENAI_MODEL_NAME";
pub const PROXY_URL: &str = "PROXY_URL";

// Notification targets.
pub const NTFY_TOPIC_URL: &str = "NTFY_TOPIC_URL";
pub const GOTIFY_URL: &str = "GOTIFY_URL";
pub const GOTIFY_TOKEN: &str = "GOTIFY_TOKEN";
pub const BARK_URL: &str = "BARK_URL";
pub const WX_BOT_URL: &str = "WX_BOT_URL";
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const WEBHOOK_URL: &str = "WEBHOOK_URL";
pub const WEBHOOK_METHOD: &str = "WEBHOOK_METHOD";
pub const WEBHOOK_HEADERS: &str = "WEBHOOK_HEADERS";
pub const WEBHOOK_CONTENT_TYPE: &str = "WEBHOOK_CONTENT_TYPE";
pub const WEBHOOK_QUERY_PARAMETERS: &str = "WEBHOOK_QUERY_PARAMETERS";
pub const WEBHOOK_BODY: &str = "WEBHOOK_BODY";

// Boolean feature flags.
pub const PCURL_TO_MOBILE: &str = "PCURL_TO_MOBILE";
pub const RUN_HEADLESS: &str = "RUN_HEADLESS";
pub const LOGIN_IS_EDGE: &str = "LOGIN_IS_EDGE";
pub const RUNNING_IN_DOCKER: &str = "RUNNING_IN_DOCKER";
pub const AI_DEBUG_MODE: &str = "AI_DEBUG_MODE";
pub const SKIP_AI_ANALYSIS: &str = "SKIP_AI_ANALYSIS";
pub const ENABLE_THINKING: &str = "ENABLE_THINKING";
pub const ENABLE_RESPONSE_FORMAT: &str = "ENABLE_RESPONSE_FORMAT";
pub const WEBHOOK_ENABLE_MARKDOWN: &str = "WEBHOOK_ENABLE_MARKDOWN";

/// The closed set of keys eligible for in-memory caching. Anything outside
/// this list is always read straight from the environment store.
pub const WHITELIST: &[&str] = &[
    OPENAI_API_KEY,
    OPENAI_BASE_URL,
    OPENAI_MODEL_NAME,
    PROXY_URL,
    NTFY_TOPIC_URL,
    GOTIFY_URL,
    GOTIFY_TOKEN,
    BARK_URL,
    WX_BOT_URL,
    TELEGRAM_BOT_TOKEN,
    TELEGRAM_CHAT_ID,
    WEBHOOK_URL,
    WEBHOOK_METHOD,
    WEBHOOK_HEADERS,
    WEBHOOK_CONTENT_TYPE,
    WEBHOOK_QUERY_PARAMETERS,
    WEBHOOK_BODY,
    PCURL_TO_MOBILE,
    RUN_HEADLESS,
    LOGIN_IS_EDGE,
    RUNNING_IN_DOCKER,
    AI_DEBUG_MODE,
    SKIP_AI_ANALYSIS,
    ENABLE_THINKING,
    ENABLE_RESPONSE_FORMAT,
    WEBHOOK_ENABLE_MARKDOWN,
];

/// Keys whose values are redacted before they reach a log line.
pub const SECRET_KEYS: &[&str] = &[
    OPENAI_API_KEY,
    TELEGRAM_BOT_TOKEN,
    GOTIFY_TOKEN,
    WX_BOT_URL,
    BARK_URL,
    WEBHOOK_URL,
];

pub fn is_whitelisted(key: &str) -> bool {
    WHITELIST.contains(&key)
}

pub fn is_secret(key: &str) -> bool {
    SECRET_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitelist_membership() {
        assert!(is_whitelisted(OPENAI_BASE_URL));
        assert!(is_whitelisted(WEBHOOK_ENABLE_MARKDOWN));
        assert!(!is_whitelisted("PATH"));
        assert!(!is_whitelisted("HOME"));
    }

    #[test]
    fn secret_classification() {
        assert!(is_secret(OPENAI_API_KEY));
        assert!(is_secret(TELEGRAM_BOT_TOKEN));
        assert!(!is_secret(OPENAI_BASE_URL));
        assert!(!is_secret(TELEGRAM_CHAT_ID));
    }
}
