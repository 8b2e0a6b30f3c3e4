// # Evolution DNS Client
//
// Zone and record operations against the cloud.ru Evolution DNS API.
//
// Every call makes exactly one HTTP request per page and returns the first
// failure to the caller. Listing walks all pages through
// [`evodns_core::fetch_all`].
//
// ## API Reference
//
// - List zones: GET `/zones?projectId=...&page=...&offset=...`
// - List records: GET `/public/records?zoneId=...&page=...&offset=...`
// - Create record: POST `/public/records`
// - Delete record: DELETE `/public/records/:record_id`
//
// The `page` query parameter carries the page size. The server treats it as
// a limit, not a page index.

use async_trait::async_trait;
use evodns_core::types::{RecordsPage, ZonesPage};
use evodns_core::{
    AuthenticatedSession, CancelSignal, ClientConfig, CreateRecordRequest, DnsRecordApi, Error,
    PageRequest, Record, Result, Zone, fetch_all,
};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::auth::TokenManager;
use crate::http;

/// cloud.ru Evolution DNS client
///
/// Cheap to share behind an `Arc`; the only mutable state is the token cache
/// inside its [`TokenManager`].
pub struct CloudRuClient {
    http: Client,
    api_endpoint: Url,
    page_size: u32,
    tokens: TokenManager,
}

impl CloudRuClient {
    /// Create a client with default endpoints, timeout and page size
    pub fn new(key_id: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(key_id, secret))
    }

    /// Create a client from a validated configuration
    ///
    /// # Errors
    ///
    /// - `Error::Config`: invalid configuration, unparsable endpoint, or the
    ///   HTTP client could not be built
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        let api_endpoint = parse_endpoint("API endpoint", &config.api_endpoint)?;
        let auth_endpoint = parse_endpoint("Auth endpoint", &config.auth_endpoint)?;

        tracing::debug!(
            api_endpoint = %http::redact_url(&api_endpoint),
            timeout = ?config.timeout(),
            page_size = config.page_size,
            "Evolution DNS client configured"
        );

        let tokens = TokenManager::new(http.clone(), auth_endpoint, config.credentials);

        Ok(Self {
            http,
            api_endpoint,
            page_size: config.page_size,
            tokens,
        })
    }

    /// Token manager backing [`DnsRecordApi::authenticate`]
    pub fn token_manager(&self) -> &TokenManager {
        &self.tokens
    }

    /// API URL for the given path segments
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| Error::config("API endpoint cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Start a request carrying the session's bearer token
    ///
    /// Fails with `Error::NotAuthenticated` before anything is sent when the
    /// session holds no token.
    fn authorized(
        &self,
        session: &AuthenticatedSession,
        method: Method,
        url: Url,
    ) -> Result<RequestBuilder> {
        let token = session.bearer()?;
        Ok(http::json_request(&self.http, method, url).bearer_auth(token))
    }

    /// Fetch one page of a listing filtered by `filter`
    ///
    /// # API Call
    ///
    /// ```http
    /// GET /<path>?<filter>=...&page=<page_size>&offset=<offset>
    /// Authorization: Bearer <token>
    /// ```
    async fn list_page<P: DeserializeOwned>(
        &self,
        session: &AuthenticatedSession,
        path: &[&str],
        filter: (&str, &str),
        request: PageRequest,
    ) -> Result<P> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut()
            .append_pair(filter.0, filter.1)
            .append_pair("page", &request.page_size.to_string())
            .append_pair("offset", &request.offset.to_string());

        let builder = self.authorized(session, Method::GET, url)?;
        http::execute(&self.http, builder, session.cancel_signal())
            .await?
            .ensure_ok()?
            .decode()
    }
}

#[async_trait]
impl DnsRecordApi for CloudRuClient {
    async fn authenticate_with(&self, cancel: CancelSignal) -> Result<AuthenticatedSession> {
        self.tokens.authenticate_with(cancel).await
    }

    async fn list_zones(
        &self,
        session: &AuthenticatedSession,
        project_id: &str,
    ) -> Result<Vec<Zone>> {
        let zones = fetch_all(self.page_size, move |request| {
            self.list_page::<ZonesPage>(session, &["zones"], ("projectId", project_id), request)
        })
        .await?;

        tracing::debug!(project_id, count = zones.len(), "Listed zones");
        Ok(zones)
    }

    async fn list_records(
        &self,
        session: &AuthenticatedSession,
        zone_id: &str,
    ) -> Result<Vec<Record>> {
        let records = fetch_all(self.page_size, move |request| {
            self.list_page::<RecordsPage>(
                session,
                &["public", "records"],
                ("zoneId", zone_id),
                request,
            )
        })
        .await?;

        tracing::debug!(zone_id, count = records.len(), "Listed records");
        Ok(records)
    }

    /// Create a record
    ///
    /// # API Call
    ///
    /// ```http
    /// POST /public/records
    /// Authorization: Bearer <token>
    /// Content-Type: application/json
    ///
    /// {"type": "...", "name": "...", "ttl": 60, "values": ["..."], "zoneId": "..."}
    /// ```
    async fn create_record(
        &self,
        session: &AuthenticatedSession,
        request: &CreateRecordRequest,
    ) -> Result<()> {
        let url = self.endpoint(&["public", "records"])?;
        let builder = http::with_json_body(self.authorized(session, Method::POST, url)?, request)?;

        http::execute(&self.http, builder, session.cancel_signal())
            .await?
            .ensure_ok()?;

        tracing::info!(
            zone_id = %request.zone_id,
            name = %request.name,
            record_type = %request.record_type,
            "Record created"
        );
        Ok(())
    }

    async fn delete_record(&self, session: &AuthenticatedSession, record_id: &str) -> Result<()> {
        if record_id.is_empty() {
            return Err(Error::invalid_input("record ID cannot be empty"));
        }

        let url = self.endpoint(&["public", "records", record_id])?;
        let builder = self.authorized(session, Method::DELETE, url)?;

        http::execute(&self.http, builder, session.cancel_signal())
            .await?
            .ensure_ok()?;

        tracing::info!(record_id, "Record deleted");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "cloudru"
    }
}

impl std::fmt::Debug for CloudRuClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudRuClient")
            .field("api_endpoint", &http::redact_url(&self.api_endpoint))
            .field("page_size", &self.page_size)
            .field("tokens", &self.tokens)
            .finish()
    }
}

fn parse_endpoint(label: &str, endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| Error::config(format!("{label} is not a valid URL: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(Error::config(format!("{label} cannot carry a path: {endpoint}")));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(Error::config(format!("{label} must not embed credentials")));
    }
    Ok(url)
}
