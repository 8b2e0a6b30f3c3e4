//! Mock server fixtures for Evolution DNS contract tests
//!
//! Every test starts its own `wiremock` server that plays both the IAM token
//! endpoint (`/auth/token`) and the DNS API (`/api/v1/...`).

use evodns_provider_cloudru::{ClientConfig, CloudRuClient};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const KEY_ID: &str = "test-key-id";
pub const SECRET: &str = "test-secret";
pub const ACCESS_TOKEN: &str = "test-access-token";

pub const AUTH_PATH: &str = "/auth/token";
pub const ZONES_PATH: &str = "/api/v1/zones";
pub const RECORDS_PATH: &str = "/api/v1/public/records";

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Configuration pointing both endpoints at `server`
pub fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(KEY_ID, SECRET)
        .with_api_endpoint(format!("{}/api/v1", server.uri()))
        .with_auth_endpoint(format!("{}{}", server.uri(), AUTH_PATH))
}

/// Client with default page size and timeout pointing at `server`
pub fn client(server: &MockServer) -> CloudRuClient {
    init_tracing();
    CloudRuClient::from_config(config(server)).expect("valid test configuration")
}

/// Token endpoint success body
pub fn token_body(token_type: &str, expires_in: i64) -> Value {
    json!({
        "access_token": ACCESS_TOKEN,
        "id_token": "test-id-token",
        "token_type": token_type,
        "expires_in": expires_in,
        "not-before-policy": 0,
        "scope": "openid"
    })
}

/// Mount a token endpoint issuing bearer tokens, expected `calls` times
pub async fn mount_token(server: &MockServer, expires_in: i64, calls: u64) {
    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("Bearer", expires_in)))
        .expect(calls)
        .mount(server)
        .await;
}

/// Record JSON as the server returns it
pub fn record_json(zone_id: &str, id: &str, name: &str) -> Value {
    json!({
        "meta": {
            "id": id,
            "taskId": "task-1",
            "createAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:05:00Z"
        },
        "zoneId": zone_id,
        "name": name,
        "type": "PUBLIC_RECORD_MANAGED_TYPE_TXT",
        "values": [format!("value-{id}")],
        "ttl": 60,
        "readOnly": false,
        "description": "",
        "tags": [],
        "state": "PUBLIC_RECORD_STATE_ACTIVE"
    })
}

/// Zone JSON as the server returns it
pub fn zone_json(project_id: &str, id: &str, name: &str) -> Value {
    json!({
        "meta": { "id": id },
        "projectId": project_id,
        "name": name,
        "domain": name,
        "readOnly": false,
        "activeState": true,
        "countRecords": "2",
        "countValues": "2"
    })
}

/// One page of the records listing
pub fn records_page(records: Vec<Value>, offset: u64, total: u64) -> Value {
    json!({ "records": records, "page": 10, "offset": offset, "total": total })
}

/// One page of the zones listing
pub fn zones_page(zones: Vec<Value>, offset: u64, total: u64) -> Value {
    json!({ "zones": zones, "page": 10, "offset": offset, "total": total })
}

/// Requests the server received on `request_path`, in arrival order
pub async fn requests_to(server: &MockServer, request_path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == request_path)
        .collect()
}

/// Value of a query parameter of a received request
pub fn query_value(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
