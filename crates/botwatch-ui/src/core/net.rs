//! Response normalisation shared by every API call.
//!
//! # Design
//! - Keep the decoding contract DOM-free so it is tested natively.
//! - "Endpoint returned nothing" decodes to the typed-empty value; "endpoint
//!   errored" and "payload malformed" stay distinct error variants.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Characters of an unparseable body echoed back in [`ApiError::Malformed`].
pub const MALFORMED_SNIPPET_CHARS: usize = 120;

/// Failure surfaced by the network client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-success HTTP status; `message` is the response body text.
    #[error("{message}")]
    Transport {
        /// HTTP status code.
        status: u16,
        /// Response body, or a generic message when the body was empty.
        message: String,
    },
    /// The request could not complete (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// Success status with a body that is not the expected JSON.
    #[error("Invalid JSON response: {snippet}")]
    Malformed {
        /// Leading characters of the offending body.
        snippet: String,
    },
    /// The request body could not be serialised.
    #[error("failed to encode request: {0}")]
    Encode(String),
}

/// Decode a completed HTTP exchange into `T`.
///
/// Empty and `null` bodies decode to `T::default()`.
///
/// # Errors
/// [`ApiError::Transport`] when `ok` is false, [`ApiError::Malformed`] when the
/// body is not valid JSON for `T`.
pub fn decode_response<T>(ok: bool, status: u16, body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if !ok {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            format!("Request failed (HTTP {status})")
        } else {
            trimmed.to_string()
        };
        return Err(ApiError::Transport { status, message });
    }
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|_| ApiError::Malformed {
            snippet: body.chars().take(MALFORMED_SNIPPET_CHARS).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use botwatch_api_models::{ActiveUsersResponse, UserRecord};

    #[test]
    fn empty_body_is_typed_empty() {
        let users: Vec<UserRecord> = decode_response(true, 200, "  ").expect("empty");
        assert!(users.is_empty());
        let active: ActiveUsersResponse = decode_response(true, 200, "null").expect("null");
        assert_eq!(active.total, 0);
    }

    #[test]
    fn non_success_carries_body_text() {
        let err = decode_response::<Vec<UserRecord>>(false, 500, "database locked")
            .expect_err("transport");
        assert_eq!(err.to_string(), "database locked");
        assert!(matches!(err, ApiError::Transport { status: 500, .. }));
        let err = decode_response::<Vec<UserRecord>>(false, 502, "").expect_err("transport");
        assert_eq!(err.to_string(), "Request failed (HTTP 502)");
    }

    #[test]
    fn malformed_body_is_truncated() {
        let body = format!("<html>{}</html>", "x".repeat(400));
        let err = decode_response::<Vec<UserRecord>>(true, 200, &body).expect_err("malformed");
        match err {
            ApiError::Malformed { snippet } => {
                assert_eq!(snippet.chars().count(), MALFORMED_SNIPPET_CHARS);
                assert!(snippet.starts_with("<html>"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn wrong_shape_is_malformed_not_empty() {
        let err = decode_response::<Vec<UserRecord>>(true, 200, "{\"items\": 3}")
            .expect_err("shape");
        assert!(matches!(err, ApiError::Malformed { .. }));
    }
}
