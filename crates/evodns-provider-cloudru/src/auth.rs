// # Token Manager
//
// Exchanges the static key ID/secret for a bearer token and caches it until
// its deadline.
//
// ## Single-flight refresh
//
// The cache sits behind one async mutex that stays locked for the whole
// authentication round-trip. At most one token request is in flight per
// manager; concurrent callers queue on the lock and, once inside, re-check
// the cache and reuse the token the previous holder stored.
//
// ## API Reference
//
// - Authentication: https://cloud.ru/ru/docs/clouddns/ug/topics/api-ref_authentication.html
// - Obtain token: POST `/api/v1/auth/token` with `{"keyId": ..., "secret": ...}`

use std::sync::Arc;
use std::time::Instant;

use evodns_core::{
    AuthenticatedSession, CancelSignal, Credentials, Error, Result, Token, TokenResponse,
};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::http;

/// Request body of the token endpoint
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthRequest<'a> {
    key_id: &'a str,
    secret: &'a str,
}

/// Bearer token cache for one set of credentials
pub struct TokenManager {
    client: Client,
    auth_endpoint: Url,
    /// ⚠️ NEVER log the secret
    credentials: Credentials,
    cached: Mutex<Option<Arc<Token>>>,
}

impl TokenManager {
    /// Create a token manager posting to `auth_endpoint`
    pub fn new(client: Client, auth_endpoint: Url, credentials: Credentials) -> Self {
        Self {
            client,
            auth_endpoint,
            credentials,
            cached: Mutex::new(None),
        }
    }

    /// Return a session carrying a currently valid token
    pub async fn authenticate(&self) -> Result<AuthenticatedSession> {
        self.authenticate_with(CancelSignal::never()).await
    }

    /// Return a session carrying a currently valid token and `cancel`
    ///
    /// Reuses the cached token while it is valid. Otherwise obtains a new one,
    /// stores it in the cache, and returns it. Nothing is cached on failure.
    pub async fn authenticate_with(&self, cancel: CancelSignal) -> Result<AuthenticatedSession> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref().filter(|token| token.is_valid()) {
            tracing::trace!("Reusing cached access token");
            return Ok(AuthenticatedSession::new(Arc::clone(token)).with_cancel(cancel));
        }

        let token = Arc::new(self.obtain_token(&cancel).await?);
        *cached = Some(Arc::clone(&token));

        Ok(AuthenticatedSession::new(token).with_cancel(cancel))
    }

    /// Drop the cached token so the next call authenticates again
    pub async fn invalidate(&self) {
        if self.cached.lock().await.take().is_some() {
            tracing::debug!("Cached access token invalidated");
        }
    }

    /// Log in and acquire a bearer token
    ///
    /// # API Call
    ///
    /// ```http
    /// POST /api/v1/auth/token
    /// Content-Type: application/json
    ///
    /// {"keyId": "...", "secret": "..."}
    /// ```
    async fn obtain_token(&self, cancel: &CancelSignal) -> Result<Token> {
        tracing::debug!(key_id = %self.credentials.key_id, "Requesting new access token");

        let payload = AuthRequest {
            key_id: &self.credentials.key_id,
            secret: &self.credentials.secret,
        };
        let builder = http::with_json_body(
            http::json_request(&self.client, Method::POST, self.auth_endpoint.clone()),
            &payload,
        )?;

        let response = http::execute(&self.client, builder, cancel).await?;
        if response.status != StatusCode::OK {
            return Err(http::classify_auth_failure(response));
        }

        let issued: TokenResponse = response.decode()?;
        if !issued.is_bearer() {
            tracing::warn!(token_type = %issued.token_type, "Rejecting non-bearer token");
            return Err(Error::UnexpectedTokenType(issued.token_type));
        }

        let token = Token::issue(issued, Instant::now());
        tracing::info!(expires_in = ?token.expires_in(), "Obtained new access token");
        Ok(token)
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("auth_endpoint", &http::redact_url(&self.auth_endpoint))
            .field("credentials", &self.credentials)
            .finish()
    }
}
