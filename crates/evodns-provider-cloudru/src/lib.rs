// # cloud.ru Evolution DNS Provider
//
// This crate provides the cloud.ru Evolution DNS implementation of
// `evodns_core::DnsRecordApi`.
//
// ## Components
//
// - **TokenManager** (`auth`): exchanges key ID/secret for a bearer token and
//   caches it until its deadline, with at most one refresh in flight
// - **CloudRuClient** (`client`): zone/record listing, creation and deletion
// - **HTTP layer** (`http`): request execution with cancellation, and the
//   classification of transport, status and JSON failures
//
// ## Behavior
//
// - One HTTP request per call (per page when listing)
// - No retry or backoff; every failure is returned to the caller
// - Fixed per-request timeout (default 5 seconds)
// - No background tasks
//
// ## Security Requirements
//
// - The secret and access tokens NEVER appear in logs or `Debug` output
// - Credentials never travel in URLs
//
// ## Usage
//
// ```rust,ignore
// use evodns_provider_cloudru::{CloudRuClient, CreateRecordRequest, DnsRecordApi};
//
// let client = CloudRuClient::new(key_id, secret)?;
// let session = client.authenticate().await?;
//
// client
//     .create_record(&session, &CreateRecordRequest::txt(zone_id, "_acme-challenge", value, 60))
//     .await?;
// ```

mod auth;
mod client;
mod http;

pub use auth::TokenManager;
pub use client::CloudRuClient;

pub use evodns_core::{
    AuthenticatedSession, CancelHandle, CancelSignal, ClientConfig, CreateRecordRequest,
    DnsRecordApi, Error, Record, Result, Zone,
};
