//! Response body decoding
//!
//! Bitfinex v1 reports failures in the response body rather than through
//! HTTP status codes, so every endpoint funnels its body through the same
//! two-stage decoder: parse the expected success shape first, and when that
//! fails (or the parsed value fails the endpoint's plausibility check) look for
//! the `{"message": ...}` error envelope before giving up.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{RestError, RestResult};

/// Error envelope the exchange wraps failures in.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: String,
}

/// Decodes a response body into `T` with no plausibility check beyond parsing.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> RestResult<T> {
    decode_with(body, "implausible body", |_| true)
}

/// Decodes a response body into `T`, accepting the value only when
/// `plausible` returns true.
///
/// The check catches bodies that parse into the success shape without
/// carrying credible data, such as an all-zero ticker. `context` names what
/// was implausible about the body and becomes the error message when no
/// envelope is recoverable. Resolution order:
///
/// 1. `T` parses and passes the check: success.
/// 2. `T` parses but fails the check: the envelope's message if present,
///    otherwise [`RestError::UnexpectedResponse`] carrying `context`.
/// 3. `T` does not parse: the envelope's message if present, otherwise the
///    original parse error.
pub(crate) fn decode_with<T, F>(body: &str, context: &str, plausible: F) -> RestResult<T>
where
    T: DeserializeOwned,
    F: FnOnce(&T) -> bool,
{
    match serde_json::from_str::<T>(body) {
        Ok(value) => {
            if plausible(&value) {
                Ok(value)
            } else if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
                Err(RestError::api(envelope.message))
            } else {
                Err(RestError::UnexpectedResponse(context.to_string()))
            }
        }
        Err(parse_err) => {
            if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
                Err(RestError::api(envelope.message))
            } else {
                Err(RestError::Parse(parse_err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        value: f64,
    }

    #[test]
    fn test_decode_success() {
        let sample: Sample = decode(r#"{"value": 1.5}"#).unwrap();
        assert_eq!(sample, Sample { value: 1.5 });
    }

    #[test]
    fn test_decode_error_envelope_on_parse_failure() {
        let err = decode::<Sample>(r#"{"message": "Unknown symbol"}"#).unwrap_err();
        assert_eq!(err.to_string(), "API: Unknown symbol");
    }

    #[test]
    fn test_decode_with_implausible_value_prefers_envelope() {
        // Parses into Sample (extra field ignored) but fails the check, and
        // the envelope message wins.
        let body = r#"{"value": 0.0, "message": "No such endpoint"}"#;
        let err = decode_with::<Sample, _>(body, "zero value", |s| s.value != 0.0).unwrap_err();
        assert_eq!(err.to_string(), "API: No such endpoint");
    }

    #[test]
    fn test_decode_with_implausible_value_reports_context() {
        let err = decode_with::<Sample, _>(r#"{"value": 0.0}"#, "zero value", |s| s.value != 0.0)
            .unwrap_err();
        assert!(matches!(err, RestError::UnexpectedResponse(_)));
        assert_eq!(err.to_string(), "Unexpected response: zero value");
    }

    #[test]
    fn test_decode_unparseable_without_envelope() {
        let err = decode::<Sample>(r#"[1, 2, 3]"#).unwrap_err();
        assert!(matches!(err, RestError::Parse(_)));
    }

    #[test]
    fn test_decode_empty_sequence_is_valid_by_default() {
        let samples: Vec<Sample> = decode("[]").unwrap();
        assert!(samples.is_empty());
    }
}
