//! Test doubles and common utilities for record API contract tests
//!
//! This module provides a minimal in-memory `DnsRecordApi` that counts calls
//! without performing any network I/O.

use evodns_core::error::{Error, Result};
use evodns_core::{
    AuthenticatedSession, CancelSignal, CreateRecordRequest, DnsRecordApi, Record, Token,
    TokenResponse, Zone,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// An in-memory record API backed by a plain record list
pub struct InMemoryRecordApi {
    /// Records across all zones, in listing order
    records: Mutex<Vec<Record>>,
    /// Call counter for list_records()
    list_call_count: AtomicUsize,
}

impl InMemoryRecordApi {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
            list_call_count: AtomicUsize::new(0),
        }
    }

    /// Get the number of times list_records() was called
    pub fn list_call_count(&self) -> usize {
        self.list_call_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DnsRecordApi for InMemoryRecordApi {
    async fn authenticate_with(&self, cancel: CancelSignal) -> Result<AuthenticatedSession> {
        Ok(session().with_cancel(cancel))
    }

    async fn list_zones(
        &self,
        session: &AuthenticatedSession,
        _project_id: &str,
    ) -> Result<Vec<Zone>> {
        session.bearer()?;
        Ok(Vec::new())
    }

    async fn list_records(
        &self,
        session: &AuthenticatedSession,
        zone_id: &str,
    ) -> Result<Vec<Record>> {
        session.bearer()?;
        self.list_call_count.fetch_add(1, Ordering::SeqCst);

        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.zone_id == zone_id)
            .cloned()
            .collect())
    }

    async fn create_record(
        &self,
        session: &AuthenticatedSession,
        request: &CreateRecordRequest,
    ) -> Result<()> {
        session.bearer()?;
        self.records.lock().unwrap().push(Record {
            zone_id: request.zone_id.clone(),
            name: request.name.clone(),
            record_type: request.record_type.clone(),
            values: request.values.clone(),
            ttl: request.ttl,
            ..Record::default()
        });
        Ok(())
    }

    async fn delete_record(&self, session: &AuthenticatedSession, record_id: &str) -> Result<()> {
        session.bearer()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id() != record_id);
        if records.len() == before {
            return Err(Error::unexpected_status(
                "DELETE",
                format!("memory://records/{record_id}"),
                404,
                "",
            ));
        }
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}

/// A session carrying a long-lived token
pub fn session() -> AuthenticatedSession {
    let response = TokenResponse {
        access_token: "test-token".into(),
        token_type: "Bearer".into(),
        expires_in: 3600,
        ..TokenResponse::default()
    };
    AuthenticatedSession::new(Arc::new(Token::issue(response, Instant::now())))
}

/// A record in `zone_id` with the given id and name
pub fn record(zone_id: &str, id: &str, name: &str) -> Record {
    let mut record = Record {
        zone_id: zone_id.to_string(),
        name: name.to_string(),
        ..Record::default()
    };
    record.meta.id = id.to_string();
    record
}
