//! Error types for the Evolution DNS client
//!
//! Every failure of an API call is classified into one of these variants.
//! Request-level variants carry the HTTP method and URL of the offending
//! request so an error can be diagnosed without re-running with verbose logs.

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the Evolution DNS client
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP round-trip itself failed (DNS, connection, timeout, cancellation)
    #[error("{method} {url}: unable to communicate with the API server: {detail}")]
    Transport {
        /// Request method
        method: String,
        /// Request URL (never contains credentials)
        url: String,
        /// Underlying failure
        detail: String,
    },

    /// The server answered with a status other than 200
    #[error("{method} {url}: unexpected status code {status}: {body}")]
    UnexpectedStatus {
        /// Request method
        method: String,
        /// Request URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The auth endpoint rejected the credentials with a structured 4xx body
    #[error("{method} {url}: {status}: {error}: {description}")]
    Auth {
        /// Request method
        method: String,
        /// Request URL
        url: String,
        /// HTTP status code (400-499)
        status: u16,
        /// `error` field of the response
        error: String,
        /// `error_description` field of the response
        description: String,
    },

    /// The response body could not be read after a successful status line
    #[error("{method} {url}: failed to read response body (status {status}): {detail}")]
    ReadResponse {
        /// Request method
        method: String,
        /// Request URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Underlying failure
        detail: String,
    },

    /// The response body is not the expected JSON document
    #[error("{method} {url}: unable to decode response (status {status}): {source}; body: {body}")]
    Decode {
        /// Request method
        method: String,
        /// Request URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
        /// Parse failure
        #[source]
        source: serde_json::Error,
    },

    /// The auth endpoint issued something other than a bearer token
    #[error("received unexpected token type: {0}")]
    UnexpectedTokenType(String),

    /// An operation was invoked with a session that holds no token
    #[error("not authenticated: the session carries no access token")]
    NotAuthenticated,

    /// A name lookup found no matching record in the zone
    #[error("record not found: no record named {name:?} in zone {zone_id}")]
    RecordNotFound {
        /// Zone that was searched
        zone_id: String,
        /// Record name that was looked up
        name: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input (e.g. a request body that cannot be serialized)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a transport error
    pub fn transport(
        method: impl Into<String>,
        url: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Transport {
            method: method.into(),
            url: url.into(),
            detail: detail.into(),
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(
        method: impl Into<String>,
        url: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Self::UnexpectedStatus {
            method: method.into(),
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a response read error
    pub fn read_response(
        method: impl Into<String>,
        url: impl Into<String>,
        status: u16,
        detail: impl Into<String>,
    ) -> Self {
        Self::ReadResponse {
            method: method.into(),
            url: url.into(),
            status,
            detail: detail.into(),
        }
    }

    /// Create a "record not found" error
    pub fn record_not_found(zone_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::RecordNotFound {
            zone_id: zone_id.into(),
            name: name.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// HTTP status code carried by the error, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. }
            | Self::Auth { status, .. }
            | Self::ReadResponse { status, .. }
            | Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error originates from the network layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
