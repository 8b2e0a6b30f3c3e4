// # evodns-core
//
// Core library for the Evolution DNS record client.
//
// ## Architecture Overview
//
// This library provides the provider-neutral parts of the authenticated
// request pipeline:
// - **Error**: typed classification of transport, HTTP and JSON failures
// - **AuthenticatedSession**: explicit token carrier for every operation
// - **CancelSignal**: caller-driven cancellation of in-flight calls
// - **fetch_all**: offset pagination over list endpoints
// - **DnsRecordApi**: trait implemented by provider clients
//
// Provider crates (e.g. `evodns-provider-cloudru`) supply the HTTP transport,
// token manager and wire details.

pub mod cancel;
pub mod config;
pub mod error;
pub mod pagination;
pub mod session;
pub mod traits;
pub mod types;

// Re-export core types for convenience
pub use cancel::{CancelHandle, CancelSignal};
pub use config::{ClientConfig, Credentials};
pub use error::{Error, Result};
pub use pagination::{PageEnvelope, PageRequest, fetch_all};
pub use session::AuthenticatedSession;
pub use traits::DnsRecordApi;
pub use types::{CreateRecordRequest, Meta, Record, TXT_RECORD_TYPE, Token, TokenResponse, Zone};
