//! Error taxonomy of the HTTP boundary and the normalizer that turns raw
//! server error bodies into one human-readable message.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Prefix the API puts in front of a JSON-encoded validation envelope when it
/// reports validation failures as a plain string, e.g.
/// `"Validation error: {\"issues\":[{\"path\":[\"email\"],\"message\":\"Required\"}]}"`.
pub const VALIDATION_ENVELOPE_MARKER: &str = "Validation error:";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("request aborted")]
    Aborted,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("request rejected: {0}")]
    Rejected(String),
}

impl ApiError {
    /// Builds an `Http` error from a non-2xx response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_error_message(body);
        let message = if message.is_empty() {
            format!("HTTP {}", status)
        } else {
            message
        };
        ApiError::Http { status, message }
    }

    /// The single flat string shown in an error banner.
    ///
    /// Transport-level failures carry no server message, so the caller's
    /// fallback (e.g. "Gagal memuat data perusahaan") is used instead.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(_) | ApiError::Timeout(_) | ApiError::Decode(_) => {
                fallback.to_string()
            }
            ApiError::Aborted => fallback.to_string(),
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Rejected(message) if message.trim().is_empty() => fallback.to_string(),
            ApiError::Rejected(message) => message.clone(),
        }
    }

    /// Aborted requests are superseded, not failed.
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}

#[derive(Debug, Deserialize)]
struct ValidationEnvelope {
    issues: Vec<Value>,
}

/// Collapses a raw error body into one message.
///
/// Precedence: `errors` array of `{path, message}`, `errors` string (possibly a
/// marker-prefixed validation envelope), `message` string, raw body text.
pub fn extract_error_message(raw_body: &str) -> String {
    let raw = raw_body.trim();
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return raw.to_string();
    };

    match value.get("errors") {
        Some(Value::Array(items)) => {
            let lines = render_issues(items);
            if !lines.is_empty() {
                return lines;
            }
        }
        Some(Value::String(s)) => return unwrap_envelope(s).unwrap_or_else(|| s.clone()),
        _ => {}
    }

    if let Some(Value::String(message)) = value.get("message") {
        return unwrap_envelope(message).unwrap_or_else(|| message.clone());
    }

    if let Value::String(s) = &value {
        return unwrap_envelope(s).unwrap_or_else(|| s.clone());
    }

    raw.to_string()
}

/// Unwraps one level of the marker-prefixed validation envelope.
fn unwrap_envelope(s: &str) -> Option<String> {
    let start = s.find(VALIDATION_ENVELOPE_MARKER)? + VALIDATION_ENVELOPE_MARKER.len();
    let envelope: ValidationEnvelope = serde_json::from_str(s[start..].trim()).ok()?;
    let lines = render_issues(&envelope.issues);
    if lines.is_empty() {
        None
    } else {
        Some(lines)
    }
}

fn render_issues(items: &[Value]) -> String {
    items
        .iter()
        .filter_map(render_issue)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_issue(item: &Value) -> Option<String> {
    if let Value::String(s) = item {
        return Some(s.clone());
    }
    let message = item.get("message").and_then(Value::as_str)?;
    let path = match item.get("path") {
        Some(Value::String(p)) => p.clone(),
        Some(Value::Array(segments)) => segments
            .iter()
            .map(|seg| match seg {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("."),
        _ => String::new(),
    };
    if path.is_empty() {
        Some(message.to_string())
    } else {
        Some(format!("{}: {}", path, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_array_single() {
        let body = r#"{"errors":[{"path":"email","message":"required"}]}"#;
        assert_eq!(extract_error_message(body), "email: required");
    }

    #[test]
    fn test_errors_array_multiple_joined_by_newline() {
        let body = r#"{"errors":[
            {"path":"email","message":"required"},
            {"path":["contract","end_date"],"message":"must be after start_date"},
            {"message":"no path"}
        ]}"#;
        assert_eq!(
            extract_error_message(body),
            "email: required\ncontract.end_date: must be after start_date\nno path"
        );
    }

    #[test]
    fn test_errors_string_with_envelope() {
        let inner = r#"{"issues":[{"path":["nik"],"message":"NIK harus 16 digit"},{"path":["company",0],"message":"invalid"}]}"#;
        let body = serde_json::json!({ "errors": format!("{} {}", VALIDATION_ENVELOPE_MARKER, inner) })
            .to_string();
        assert_eq!(
            extract_error_message(&body),
            "nik: NIK harus 16 digit\ncompany.0: invalid"
        );
    }

    #[test]
    fn test_errors_string_with_broken_envelope_is_shown_verbatim() {
        let raw = format!("{} {{not json", VALIDATION_ENVELOPE_MARKER);
        let body = serde_json::json!({ "errors": raw.clone() }).to_string();
        assert_eq!(extract_error_message(&body), raw);
    }

    #[test]
    fn test_plain_message() {
        let body = r#"{"message":"Perusahaan tidak ditemukan"}"#;
        assert_eq!(extract_error_message(body), "Perusahaan tidak ditemukan");
    }

    #[test]
    fn test_unparseable_body_is_returned_raw() {
        assert_eq!(
            extract_error_message("  502 Bad Gateway\n"),
            "502 Bad Gateway"
        );
        assert_eq!(extract_error_message(r#"{"foo":1}"#), r#"{"foo":1}"#);
    }

    #[test]
    fn test_from_response_falls_back_to_status() {
        assert_eq!(
            ApiError::from_response(500, ""),
            ApiError::Http {
                status: 500,
                message: "HTTP 500".into()
            }
        );
    }

    #[test]
    fn test_user_message_uses_fallback_for_transport_errors() {
        let fallback = "Gagal memuat data perusahaan";
        assert_eq!(ApiError::Network("offline".into()).user_message(fallback), fallback);
        assert_eq!(ApiError::Timeout(30_000).user_message(fallback), fallback);
        assert_eq!(
            ApiError::from_response(422, r#"{"message":"Data tidak valid"}"#).user_message(fallback),
            "Data tidak valid"
        );
        assert_eq!(ApiError::Rejected(String::new()).user_message(fallback), fallback);
    }
}
