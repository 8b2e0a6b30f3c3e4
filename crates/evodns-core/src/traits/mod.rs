//! Core traits for the Evolution DNS client
//!
//! - [`DnsRecordApi`]: authenticated zone/record operations

pub mod record_api;

pub use record_api::DnsRecordApi;
