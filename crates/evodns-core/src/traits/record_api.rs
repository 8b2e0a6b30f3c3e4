// # DNS Record API Trait
//
// Defines the interface used by DNS-01 challenge orchestration to publish and
// remove TXT records.
//
// ## Implementations
//
// - cloud.ru Evolution DNS: `evodns-provider-cloudru` crate
//
// ## Usage
//
// ```rust,ignore
// use evodns_core::{CreateRecordRequest, DnsRecordApi};
//
// async fn publish(api: &dyn DnsRecordApi, zone_id: &str, value: &str) -> evodns_core::Result<()> {
//     let session = api.authenticate().await?;
//
//     api.create_record(
//         &session,
//         &CreateRecordRequest::txt(zone_id, "_acme-challenge", value, 60),
//     )
//     .await?;
//
//     // ... later, once validation is done
//     let record = api
//         .find_record_by_name(&session, zone_id, "_acme-challenge")
//         .await?;
//     api.delete_record(&session, record.id()).await
// }
// ```

use async_trait::async_trait;

use crate::cancel::CancelSignal;
use crate::error::{Error, Result};
use crate::session::AuthenticatedSession;
use crate::types::{CreateRecordRequest, Record, Zone};

/// Trait for DNS record API clients
///
/// Every record/zone operation takes an explicit [`AuthenticatedSession`].
/// A session without a token must fail with [`Error::NotAuthenticated`]
/// before any request is issued.
///
/// # Thread Safety
///
/// Implementations must be thread-safe: challenges for several domains may
/// run concurrently against one client.
///
/// # Retries
///
/// Implementations make a single attempt per call. Every failure is returned
/// to the caller, which owns any retry policy.
#[async_trait]
pub trait DnsRecordApi: Send + Sync {
    /// Obtain a session carrying a currently valid token
    async fn authenticate(&self) -> Result<AuthenticatedSession> {
        self.authenticate_with(CancelSignal::never()).await
    }

    /// Obtain a session whose calls observe `cancel`
    ///
    /// The authentication round-trip itself also observes `cancel`.
    async fn authenticate_with(&self, cancel: CancelSignal) -> Result<AuthenticatedSession>;

    /// List all zones of a project
    async fn list_zones(
        &self,
        session: &AuthenticatedSession,
        project_id: &str,
    ) -> Result<Vec<Zone>>;

    /// List all records of a zone
    async fn list_records(
        &self,
        session: &AuthenticatedSession,
        zone_id: &str,
    ) -> Result<Vec<Record>>;

    /// Create a record
    async fn create_record(
        &self,
        session: &AuthenticatedSession,
        request: &CreateRecordRequest,
    ) -> Result<()>;

    /// Delete a record by its identifier
    async fn delete_record(&self, session: &AuthenticatedSession, record_id: &str) -> Result<()>;

    /// Find the first record of a zone whose name matches exactly
    ///
    /// Lists every record of the zone and scans it linearly.
    ///
    /// # Returns
    ///
    /// - `Ok(Record)`: the first match in server order
    /// - `Err(Error::RecordNotFound)`: no record has that name
    async fn find_record_by_name(
        &self,
        session: &AuthenticatedSession,
        zone_id: &str,
        name: &str,
    ) -> Result<Record> {
        self.list_records(session, zone_id)
            .await?
            .into_iter()
            .find(|record| record.name == name)
            .ok_or_else(|| Error::record_not_found(zone_id, name))
    }

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
