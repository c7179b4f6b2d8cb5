//! Config redaction: produce safe-to-print config snapshots by masking secrets.

use serde_json::Value;

use crate::schema::GatewayConfig;

/// Keys whose string values are secrets.
static SECRET_KEYS: &[&str] = &["apiKey", "api_key", "token", "secret", "password"];

/// Serialize the config with every secret replaced by a short hint.
pub fn redact(config: &GatewayConfig) -> Value {
    let value = serde_json::to_value(config).unwrap_or(Value::Null);
    redact_value(&value, "")
}

fn is_secret_key(key: &str) -> bool {
    SECRET_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

fn redact_value(value: &Value, key: &str) -> Value {
    match value {
        Value::String(s) if is_secret_key(key) && !s.is_empty() => {
            // Keep the first 4 chars of long secrets as a hint.
            let hint = if s.chars().count() > 8 {
                format!("{}***", s.chars().take(4).collect::<String>())
            } else {
                "***".to_string()
            };
            Value::String(hint)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(|v| redact_value(v, key)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), redact_value(v, k)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_api_key() {
        let config = GatewayConfig {
            api_key: "bz-abcdef123456".into(),
            ..Default::default()
        };
        let redacted = redact(&config);
        let key = redacted["apiKey"].as_str().unwrap();
        assert_eq!(key, "bz-a***");
        assert_eq!(redacted["port"], 8000);
    }

    #[test]
    fn short_keys_are_fully_masked() {
        let config = GatewayConfig {
            api_key: "abc".into(),
            ..Default::default()
        };
        assert_eq!(redact(&config)["apiKey"], "***");
    }
}
