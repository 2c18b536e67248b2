//! HTTP Basic authentication against the built-in dashboard account

use std::fmt;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use subtle::ConstantTimeEq;
use thiserror::Error;

const USERNAME: &str = "user";
const PASSWORD: &str = "password";

/// Why a request failed authentication.
///
/// Every variant maps to `401 Unauthorized` with a `WWW-Authenticate: Basic`
/// challenge; only the `detail` message differs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header, or a scheme other than `Basic`
    #[error("Not authenticated")]
    Missing,

    /// `Basic` scheme with a payload that is not base64 `user:pass`
    #[error("Invalid authentication credentials")]
    Malformed,

    /// Well-formed credentials that do not match the built-in account
    #[error("Incorrect username or password")]
    Rejected,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "detail": self.to_string(),
        }));
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Basic")],
            body,
        )
            .into_response()
    }
}

/// Username and password decoded from an `Authorization: Basic` header
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Extract credentials from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AuthError> {
        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::Missing)?
            .to_str()
            .map_err(|_| AuthError::Malformed)?;

        Self::parse(value)
    }

    /// Parse a raw `Authorization` header value.
    ///
    /// The scheme is matched case-insensitively and the decoded payload is split
    /// at the first `:`, so passwords may themselves contain colons.
    pub fn parse(value: &str) -> Result<Self, AuthError> {
        let (scheme, payload) = value.trim().split_once(' ').unwrap_or((value.trim(), ""));

        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(AuthError::Missing);
        }

        let decoded = STANDARD
            .decode(payload.trim())
            .map_err(|_| AuthError::Malformed)?;
        let decoded = String::from_utf8(decoded).map_err(|_| AuthError::Malformed)?;

        let (username, password) = decoded.split_once(':').ok_or(AuthError::Malformed)?;
        Ok(Self::new(username, password))
    }

    /// Encode as an `Authorization` header value.
    pub fn to_header_value(&self) -> String {
        let payload = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {}", payload)
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Caller whose credentials matched the built-in account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Check credentials against the built-in account.
///
/// Both fields are compared in constant time and the results combined before
/// branching, so a wrong username costs the same as a wrong password.
pub fn verify(credentials: &BasicCredentials) -> Result<AuthenticatedUser, AuthError> {
    let username_ok = credentials.username.as_bytes().ct_eq(USERNAME.as_bytes());
    let password_ok = credentials.password.as_bytes().ct_eq(PASSWORD.as_bytes());

    if bool::from(username_ok & password_ok) {
        Ok(AuthenticatedUser {
            username: credentials.username.clone(),
        })
    } else {
        Err(AuthError::Rejected)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let credentials = BasicCredentials::from_headers(&parts.headers).map_err(|err| {
            tracing::warn!(path = %parts.uri.path(), reason = %err, "Authentication failed");
            err
        })?;

        verify(&credentials).map_err(|err| {
            tracing::warn!(
                path = %parts.uri.path(),
                username = %credentials.username,
                reason = %err,
                "Authentication failed"
            );
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_parse_valid_header() {
        // "user:password"
        let creds = BasicCredentials::parse("Basic dXNlcjpwYXNzd29yZA==").unwrap();
        assert_eq!(creds, BasicCredentials::new("user", "password"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let creds = BasicCredentials::parse("basic dXNlcjpwYXNzd29yZA==").unwrap();
        assert_eq!(creds.username, "user");
    }

    #[test]
    fn test_password_may_contain_colon() {
        let header = BasicCredentials::new("user", "pa:ss:word").to_header_value();
        let creds = BasicCredentials::parse(&header).unwrap();
        assert_eq!(creds.username, "user");
        assert_eq!(creds.password, "pa:ss:word");
    }

    #[test]
    fn test_empty_password_parses_but_is_rejected() {
        let creds = BasicCredentials::parse(&BasicCredentials::new("user", "").to_header_value())
            .unwrap();
        assert_eq!(creds.password, "");
        assert_eq!(verify(&creds), Err(AuthError::Rejected));
    }

    #[test]
    fn test_other_scheme_is_missing() {
        assert_eq!(
            BasicCredentials::parse("Bearer abc.def.ghi"),
            Err(AuthError::Missing)
        );
    }

    #[test]
    fn test_bad_payloads_are_malformed() {
        assert_eq!(BasicCredentials::parse("Basic"), Err(AuthError::Malformed));
        assert_eq!(
            BasicCredentials::parse("Basic not-base64!"),
            Err(AuthError::Malformed)
        );
        // "userpassword" has no separator
        assert_eq!(
            BasicCredentials::parse("Basic dXNlcnBhc3N3b3Jk"),
            Err(AuthError::Malformed)
        );
        // invalid UTF-8
        assert_eq!(BasicCredentials::parse("Basic //79"), Err(AuthError::Malformed));
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(
            BasicCredentials::from_headers(&headers),
            Err(AuthError::Missing)
        );
    }

    #[test]
    fn test_non_ascii_header_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Basic \xff").unwrap(),
        );
        assert_eq!(
            BasicCredentials::from_headers(&headers),
            Err(AuthError::Malformed)
        );
    }

    #[test]
    fn test_verify() {
        let user = verify(&BasicCredentials::new("user", "password")).unwrap();
        assert_eq!(user.username, "user");

        for (username, password) in [
            ("user", "wrong"),
            ("admin", "password"),
            ("User", "password"),
            ("user", "password "),
            ("", ""),
        ] {
            assert_eq!(
                verify(&BasicCredentials::new(username, password)),
                Err(AuthError::Rejected),
                "{username}:{password} should be rejected"
            );
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", BasicCredentials::new("user", "hunter2"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_rejection_carries_challenge() {
        let response = AuthError::Rejected.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Basic");
    }
}
