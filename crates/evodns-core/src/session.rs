// # Authenticated Session
//
// Explicit credential carrier passed to every record/zone operation.
//
// A session is produced by a token manager and holds the token that was
// current when it was created, plus the caller's cancellation signal. It can
// be reused for a bounded sequence of calls. A session built with
// `AuthenticatedSession::unauthenticated()` carries no token, and operations
// invoked with it fail with `Error::NotAuthenticated` before any request.

use std::sync::Arc;

use crate::cancel::CancelSignal;
use crate::error::{Error, Result};
use crate::types::Token;

/// Token and cancellation context for one or more API calls
#[derive(Debug, Clone, Default)]
pub struct AuthenticatedSession {
    token: Option<Arc<Token>>,
    cancel: CancelSignal,
}

impl AuthenticatedSession {
    /// Create a session around an issued token
    pub fn new(token: Arc<Token>) -> Self {
        Self {
            token: Some(token),
            cancel: CancelSignal::never(),
        }
    }

    /// Create a session without a token
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// Attach a cancellation signal
    pub fn with_cancel(mut self, cancel: CancelSignal) -> Self {
        self.cancel = cancel;
        self
    }

    /// The token carried by the session, if any
    pub fn token(&self) -> Option<&Token> {
        self.token.as_deref()
    }

    /// Whether the session carries a token
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Bearer value for the `Authorization` header
    pub fn bearer(&self) -> Result<&str> {
        self.token
            .as_deref()
            .map(Token::access_token)
            .ok_or(Error::NotAuthenticated)
    }

    /// Cancellation signal observed by calls made with this session
    pub fn cancel_signal(&self) -> &CancelSignal {
        &self.cancel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelHandle;
    use crate::types::TokenResponse;
    use std::time::Instant;

    fn token(value: &str) -> Arc<Token> {
        let response = TokenResponse {
            access_token: value.into(),
            token_type: "Bearer".into(),
            expires_in: 300,
            ..TokenResponse::default()
        };
        Arc::new(Token::issue(response, Instant::now()))
    }

    #[test]
    fn test_unauthenticated_session_has_no_bearer() {
        let session = AuthenticatedSession::unauthenticated();
        assert!(!session.is_authenticated());
        assert!(matches!(session.bearer(), Err(Error::NotAuthenticated)));
    }

    #[test]
    fn test_session_exposes_bearer() {
        let session = AuthenticatedSession::new(token("abc"));
        assert!(session.is_authenticated());
        assert_eq!(session.bearer().unwrap(), "abc");
        assert!(!session.cancel_signal().is_cancelled());
    }

    #[test]
    fn test_session_carries_cancel_signal() {
        let (handle, signal) = CancelHandle::new();
        let session = AuthenticatedSession::new(token("abc")).with_cancel(signal);

        handle.cancel("caller gave up");
        assert_eq!(
            session.cancel_signal().cause().as_deref(),
            Some("caller gave up")
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let session = AuthenticatedSession::new(token("very-secret-token"));
        assert!(!format!("{:?}", session).contains("very-secret-token"));
    }
}
