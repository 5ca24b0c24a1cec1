use serde_json::{Map, Value, json};

use crate::config::Settings;

/// Adjust outbound AI request parameters according to the feature toggles.
///
/// When the thinking toggle is on, the request carries an explicit
/// `enable_thinking: false` opt-out in `extra_body`. When response
/// formatting is off, any `response_format` entry is stripped. Pure
/// transform; no I/O and no failure modes.
pub fn build_request_params(
    settings: &Settings,
    mut params: Map<String, Value>,
) -> Map<String, Value> {
    if settings.enable_thinking {
        params.insert("extra_body".to_string(), json!({"enable_thinking": false}));
    }

    if !settings.enable_response_format {
        params.remove("response_format");
    }

    params
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::ConfigCache;
    use crate::env::{EnvStore, MemoryEnv};

    fn settings_with(vars: &[(&str, &str)]) -> Settings {
        let env = Arc::new(MemoryEnv::new());
        for (key, value) in vars {
            env.set_var(key, value);
        }
        Settings::load(&ConfigCache::new(env)).unwrap()
    }

    fn params(entries: &[(&str, Value)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn untouched_when_toggles_are_default() {
        let settings = settings_with(&[]);
        let input = params(&[
            ("model", json!("model-x")),
            ("response_format", json!({"type": "json_object"})),
        ]);
        let output = build_request_params(&settings, input.clone());
        assert_eq!(output, input);
    }

    // The enabled toggle injects an explicit opt-out rather than opting in;
    // kept as-is until the upstream request contract says otherwise.
    #[test]
    fn thinking_toggle_injects_disable_flag() {
        let settings = settings_with(&[("ENABLE_THINKING", "true")]);
        let output = build_request_params(&settings, params(&[("model", json!("model-x"))]));
        assert_eq!(
            output.get("extra_body"),
            Some(&json!({"enable_thinking": false}))
        );
    }

    #[test]
    fn disabled_response_format_is_stripped() {
        let settings = settings_with(&[("ENABLE_RESPONSE_FORMAT", "false")]);
        let output = build_request_params(
            &settings,
            params(&[
                ("model", json!("model-x")),
                ("response_format", json!({"type": "json_object"})),
            ]),
        );
        assert!(!output.contains_key("response_format"));
        assert_eq!(output.get("model"), Some(&json!("model-x")));
    }

    #[test]
    fn enabled_response_format_is_preserved() {
        let settings = settings_with(&[("ENABLE_RESPONSE_FORMAT", "true")]);
        let output = build_request_params(
            &settings,
            params(&[("response_format", json!({"type": "json_object"}))]),
        );
        assert_eq!(
            output.get("response_format"),
            Some(&json!({"type": "json_object"}))
        );
    }

    #[test]
    fn stripping_is_a_no_op_without_the_entry() {
        let settings = settings_with(&[("ENABLE_RESPONSE_FORMAT", "false")]);
        let output = build_request_params(&settings, params(&[("model", json!("model-x"))]));
        assert_eq!(output.len(), 1);
    }
}
