//! Configuration types for the Evolution DNS client
//!
//! Loading the configuration (environment, files, CLI) is left to the caller;
//! this module only defines the structure, its defaults, and validation.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Evolution DNS API base URL
pub const DEFAULT_API_ENDPOINT: &str = "https://console.cloud.ru/u-api/svp/evodns/v1";

/// Default IAM token endpoint
pub const DEFAULT_AUTH_ENDPOINT: &str = "https://iam.api.cloud.ru/api/v1/auth/token";

/// Static credentials exchanged for a bearer token
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Service account key ID
    pub key_id: String,

    /// Service account secret
    /// ⚠️ NEVER log this value
    pub secret: String,
}

impl Credentials {
    /// Create a new credential pair
    pub fn new(key_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            secret: secret.into(),
        }
    }
}

// Custom Debug implementation that hides the secret
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("secret", &"<REDACTED>")
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Credentials for the auth endpoint
    pub credentials: Credentials,

    /// API base URL
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    /// Token endpoint URL
    #[serde(default = "default_auth_endpoint")]
    pub auth_endpoint: String,

    /// Per-request timeout (in seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of elements requested per page when listing
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl ClientConfig {
    /// Create a configuration with default endpoints and limits
    pub fn new(key_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(key_id, secret),
            api_endpoint: default_api_endpoint(),
            auth_endpoint: default_auth_endpoint(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }

    /// Override the API base URL
    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    /// Override the token endpoint URL
    pub fn with_auth_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.auth_endpoint = endpoint.into();
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Override the listing page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Per-request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.credentials.key_id.is_empty() {
            return Err(crate::Error::config("Key ID cannot be empty"));
        }
        if self.credentials.secret.is_empty() {
            return Err(crate::Error::config("Secret cannot be empty"));
        }

        validate_endpoint("API endpoint", &self.api_endpoint)?;
        validate_endpoint("Auth endpoint", &self.auth_endpoint)?;

        if self.timeout_secs == 0 {
            return Err(crate::Error::config("Request timeout must be > 0"));
        }
        // A zero page size would never advance the offset.
        if self.page_size == 0 {
            return Err(crate::Error::config("Page size must be > 0"));
        }

        Ok(())
    }
}

fn validate_endpoint(label: &str, endpoint: &str) -> Result<(), crate::Error> {
    if endpoint.is_empty() {
        return Err(crate::Error::config(format!("{label} cannot be empty")));
    }
    if !endpoint.starts_with("https://") && !endpoint.starts_with("http://") {
        return Err(crate::Error::config(format!(
            "{label} must use HTTP or HTTPS scheme. Got: {endpoint}"
        )));
    }
    Ok(())
}

fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_auth_endpoint() -> String {
    DEFAULT_AUTH_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_page_size() -> u32 {
    10
}
