// # Zones and Records
//
// Snapshots of the provider's zone and record resources, the write-side
// projection used to create a record, and the paginated list envelopes.
//
// The server omits empty fields or sends them as `null`; either way every
// field decodes to its default. Read-only flags, states and tags are passed
// through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::pagination::PageEnvelope;

/// Record type used for TXT records
pub const TXT_RECORD_TYPE: &str = "PUBLIC_RECORD_MANAGED_TYPE_TXT";

/// Free-form tag values attached to zones and records
pub type Tags = Vec<serde_json::Value>;

/// Server-side metadata attached to zones and records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    /// Resource identifier
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Identifier of the asynchronous task that last touched the resource
    #[serde(deserialize_with = "null_as_default")]
    pub task_id: String,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(alias = "updatedAtv", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// DNS zone as returned by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Zone {
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Meta,
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub read_only: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub active_state: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count_records: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count_values: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Tags,
}

impl Zone {
    /// Zone identifier
    pub fn id(&self) -> &str {
        &self.meta.id
    }
}

/// DNS record as returned by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Meta,
    #[serde(deserialize_with = "null_as_default")]
    pub zone_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub record_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ttl: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub read_only: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Tags,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
}

impl Record {
    /// Record identifier (used for deletion)
    pub fn id(&self) -> &str {
        &self.meta.id
    }

    /// Whether this is a TXT record
    pub fn is_txt(&self) -> bool {
        self.record_type == TXT_RECORD_TYPE
    }
}

/// Request body for creating a record
///
/// The server assigns the identifier, so none is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub ttl: u32,
    pub values: Vec<String>,
    pub zone_id: String,
}

impl CreateRecordRequest {
    /// Build a TXT record request carrying a single value
    pub fn txt(
        zone_id: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            record_type: TXT_RECORD_TYPE.to_string(),
            name: name.into(),
            ttl,
            values: vec![value.into()],
            zone_id: zone_id.into(),
        }
    }
}

/// One page of the zones listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ZonesPage {
    #[serde(deserialize_with = "null_as_default")]
    pub zones: Vec<Zone>,
    #[serde(deserialize_with = "null_as_default")]
    pub page: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub offset: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

impl PageEnvelope for ZonesPage {
    type Item = Zone;

    fn into_parts(self) -> (Vec<Zone>, u64) {
        (self.zones, self.total)
    }
}

/// One page of the records listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordsPage {
    #[serde(deserialize_with = "null_as_default")]
    pub records: Vec<Record>,
    #[serde(deserialize_with = "null_as_default")]
    pub page: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub offset: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

impl PageEnvelope for RecordsPage {
    type Item = Record;

    fn into_parts(self) -> (Vec<Record>, u64) {
        (self.records, self.total)
    }
}
