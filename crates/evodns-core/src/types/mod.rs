//! Data model shared by every client implementation
//!
//! - [`Token`]: cached bearer token with its deadline
//! - [`Zone`] / [`Record`]: server snapshots
//! - [`CreateRecordRequest`]: write-side projection of a record

use serde::{Deserialize, Deserializer};

pub mod dns;
pub mod token;

pub use dns::{
    CreateRecordRequest, Meta, Record, RecordsPage, Tags, TXT_RECORD_TYPE, Zone, ZonesPage,
};
pub use token::{BEARER_TOKEN_TYPE, Token, TokenResponse};

/// Decode an explicit `null` as the default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
