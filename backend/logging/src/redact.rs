//! Log Redaction
//!
//! Scrubs API keys, bearer tokens, and inline base64 image payloads from
//! strings prior to logging.

use regex::Regex;
use std::sync::LazyLock;

static API_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b((?:Key|Bearer)\s+)[A-Za-z0-9\-\._~+/]{8,}=*").unwrap()
});
static DATA_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(data:[a-z]+/[a-z0-9.+-]+;base64,)[A-Za-z0-9+/]+=*").unwrap());

/// Redacts sensitive patterns in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = API_KEY_RE.replace_all(input, "${1}[REDACTED_TOKEN]");
    DATA_URL_RE
        .replace_all(&redacted, "${1}[REDACTED_PAYLOAD]")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_authorization_values() {
        let clean = redact_sensitive_data("Authorization: Key bz_abc123XYZ== sent");
        assert_eq!(clean, "Authorization: Key [REDACTED_TOKEN] sent");
        let clean = redact_sensitive_data("Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
        assert!(!clean.contains("eyJhbGci"));
    }

    #[test]
    fn redacts_data_url_payload_but_keeps_media_type() {
        let clean = redact_sensitive_data("body={\"base64\":\"data:image/png;base64,iVBORw0KGgo=\"}");
        assert_eq!(
            clean,
            "body={\"base64\":\"data:image/png;base64,[REDACTED_PAYLOAD]\"}"
        );
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(redact_sensitive_data("a cat on a mat"), "a cat on a mat");
    }
}
