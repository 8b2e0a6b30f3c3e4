// # Bearer Token
//
// Wire shape of the IAM token response and the cached token derived from it.
//
// A `Token` is created once per successful authentication and never mutated.
// A later authentication supersedes it with a fresh value.

use serde::Deserialize;
use std::time::{Duration, Instant};

use super::null_as_default;

/// Token type accepted from the auth endpoint (compared case-insensitively)
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// Longest lifetime honoured for a single token (one day)
pub const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Raw token response as returned by the auth endpoint
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenResponse {
    /// The bearer token for use in API requests
    #[serde(deserialize_with = "null_as_default")]
    pub access_token: String,
    /// OpenID identity token
    #[serde(deserialize_with = "null_as_default")]
    pub id_token: String,
    /// Token type, expected to be "Bearer"
    #[serde(deserialize_with = "null_as_default")]
    pub token_type: String,
    /// Number of seconds before expiration
    #[serde(deserialize_with = "null_as_default")]
    pub expires_in: i64,
    /// Not-before policy timestamp
    #[serde(rename = "not-before-policy", deserialize_with = "null_as_default")]
    pub not_before_policy: i64,
    /// Granted scopes
    #[serde(deserialize_with = "null_as_default")]
    pub scope: String,
}

impl TokenResponse {
    /// Whether the response carries a bearer token
    pub fn is_bearer(&self) -> bool {
        self.token_type.eq_ignore_ascii_case(BEARER_TOKEN_TYPE)
    }
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<REDACTED>")
            .field("id_token", &"<REDACTED>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("not_before_policy", &self.not_before_policy)
            .field("scope", &self.scope)
            .finish()
    }
}

/// An issued bearer token with its absolute deadline
#[derive(Clone)]
pub struct Token {
    access_token: String,
    token_type: String,
    expires_in: Duration,
    scope: String,
    deadline: Instant,
}

impl Token {
    /// Build a token from an auth response received at `issued_at`
    ///
    /// The deadline is `issued_at + expires_in`. Negative lifetimes are
    /// treated as zero, which yields an already-expired token. Lifetimes
    /// above [`MAX_TOKEN_LIFETIME`] are capped to it.
    pub fn issue(response: TokenResponse, issued_at: Instant) -> Self {
        let expires_in = Duration::from_secs(response.expires_in.max(0).unsigned_abs())
            .min(MAX_TOKEN_LIFETIME);
        let deadline = issued_at.checked_add(expires_in).unwrap_or(issued_at);

        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_in,
            scope: response.scope,
            deadline,
        }
    }

    /// The bearer token value
    /// ⚠️ NEVER log this value
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Token type as reported by the server
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Lifetime granted by the server
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    /// Granted scopes
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Point in time after which the token must not be reused
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// A token is usable iff `now` is strictly before its deadline
    pub fn is_valid_at(&self, now: Instant) -> bool {
        now < self.deadline
    }

    /// Whether the token is usable right now
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Instant::now())
    }
}

// Custom Debug implementation that hides the token values
impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<REDACTED>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("deadline", &self.deadline)
            .finish()
    }
}
