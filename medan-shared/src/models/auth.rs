use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Minimum length of a credible bearer token.
///
/// The sign-in endpoint has been observed returning short error strings
/// with a 200 status; anything at or under 20 characters is treated as an
/// authentication failure, not a token.
pub const MIN_TOKEN_LEN: usize = 21;

/// Credentials submitted to `/auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInRequest {
    /// Staff email address.
    pub email: String,
    /// Staff password.
    pub password: String,
}

/// Pulls the bearer token out of a sign-in response body.
///
/// The endpoint is polymorphic: the body may be the bare token string, or
/// an object carrying it under `token`, `accessToken`, `data.token`, or
/// `data` itself. Returns `None` when no candidate is found or the
/// candidate is too short to be a real token (see [`MIN_TOKEN_LEN`]).
#[must_use]
pub fn extract_token(body: &Value) -> Option<String> {
    let candidate = match body {
        Value::String(token) => Some(token.as_str()),
        Value::Object(_) => body
            .get("token")
            .and_then(Value::as_str)
            .or_else(|| body.get("accessToken").and_then(Value::as_str))
            .or_else(|| body.get("data").and_then(|d| d.get("token")).and_then(Value::as_str))
            .or_else(|| body.get("data").and_then(Value::as_str)),
        _ => None,
    };
    candidate
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.payload.signature";

    /// Tests the sign-in payload wire shape
    #[test]
    fn test_sign_in_request_shape() {
        let payload = SignInRequest {
            email: "ops@medan.sy".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "email": "ops@medan.sy", "password": "secret" })
        );
    }

    /// Tests the bare-string body shape
    #[test]
    fn test_extract_token_bare_string() {
        assert_eq!(extract_token(&json!(TOKEN)), Some(TOKEN.to_string()));
    }

    /// Tests every object field the backend is known to use
    #[test]
    fn test_extract_token_object_fields() {
        assert_eq!(extract_token(&json!({ "token": TOKEN })), Some(TOKEN.to_string()));
        assert_eq!(
            extract_token(&json!({ "accessToken": TOKEN })),
            Some(TOKEN.to_string())
        );
        assert_eq!(
            extract_token(&json!({ "data": { "token": TOKEN } })),
            Some(TOKEN.to_string())
        );
        assert_eq!(extract_token(&json!({ "data": TOKEN })), Some(TOKEN.to_string()));
    }

    /// Tests field precedence when several candidates are present
    #[test]
    fn test_extract_token_precedence() {
        let body = json!({ "token": TOKEN, "accessToken": "x".repeat(30) });
        assert_eq!(extract_token(&body), Some(TOKEN.to_string()));
    }

    /// Tests that short strings are rejected as non-tokens
    #[test]
    fn test_extract_token_rejects_short() {
        assert_eq!(extract_token(&json!("a".repeat(20))), None);
        assert_eq!(extract_token(&json!({ "token": "short" })), None);
        assert_eq!(extract_token(&json!("a".repeat(21))), Some("a".repeat(21)));
    }

    /// Tests bodies with no token at all
    #[test]
    fn test_extract_token_missing() {
        assert_eq!(extract_token(&json!({ "message": "welcome" })), None);
        assert_eq!(extract_token(&json!(42)), None);
        assert_eq!(extract_token(&json!(null)), None);
    }
}
