use std::borrow::Cow;

use crate::config::keys;

const REDACTION: &str = "****";

/// Redact a secret-classified value for log display.
///
/// Secret values longer than eight characters keep their first and last
/// four characters around the redaction marker; shorter ones collapse to
/// the marker alone. Non-secret keys pass through unchanged. Stored and
/// returned configuration values are never affected.
pub fn mask<'a>(key: &str, value: &'a str) -> Cow<'a, str> {
    if !keys::is_secret(key) || value.is_empty() {
        return Cow::Borrowed(value);
    }

    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        Cow::Owned(format!("{head}{REDACTION}{tail}"))
    } else {
        Cow::Borrowed(REDACTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_secrets_keep_head_and_tail() {
        assert_eq!(mask(keys::OPENAI_API_KEY, "sk-abcdefghij"), "sk-a****ghij");
        assert_eq!(
            mask(keys::TELEGRAM_BOT_TOKEN, "123456:ABC-DEF"),
            "1234****-DEF"
        );
    }

    #[test]
    fn short_secrets_collapse_to_the_marker() {
        assert_eq!(mask(keys::OPENAI_API_KEY, "short"), "****");
        assert_eq!(mask(keys::GOTIFY_TOKEN, "12345678"), "****");
    }

    #[test]
    fn non_secret_keys_pass_through() {
        assert_eq!(mask(keys::OPENAI_BASE_URL, "http://x"), "http://x");
        assert_eq!(mask(keys::OPENAI_MODEL_NAME, "model-x"), "model-x");
    }

    #[test]
    fn empty_values_pass_through() {
        assert_eq!(mask(keys::OPENAI_API_KEY, ""), "");
    }
}
