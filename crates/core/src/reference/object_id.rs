// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ObjectId capability gate
//!
//! ObjectId support comes from the `bson` crate behind the `object-id`
//! feature. Without it, `ObjectId` is uninhabited and every operation that
//! needs the capability reports a configuration error.

use crate::error::RefError;

#[cfg(feature = "object-id")]
pub use bson::oid::ObjectId;

/// Placeholder for the 12-byte ObjectId when support is not compiled in
#[cfg(not(feature = "object-id"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectId {}

#[cfg(feature = "object-id")]
pub(super) fn generate() -> Result<String, RefError> {
    use crate::id::IdGen;
    Ok(crate::id::ObjectIdGen.next())
}

#[cfg(feature = "object-id")]
pub(super) fn parse(value: &str) -> Result<ObjectId, RefError> {
    ObjectId::parse_str(value).map_err(|e| RefError::InvalidObjectId {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Seconds since the Unix epoch held in the first four bytes
#[cfg(feature = "object-id")]
pub(super) fn timestamp_seconds(oid: &ObjectId) -> u32 {
    let bytes = oid.bytes();
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(not(feature = "object-id"))]
pub(super) fn generate() -> Result<String, RefError> {
    Err(unavailable())
}

#[cfg(not(feature = "object-id"))]
pub(super) fn parse(_value: &str) -> Result<ObjectId, RefError> {
    Err(unavailable())
}

#[cfg(not(feature = "object-id"))]
pub(super) fn timestamp_seconds(oid: &ObjectId) -> u32 {
    match *oid {}
}

#[cfg(not(feature = "object-id"))]
fn unavailable() -> RefError {
    tracing::warn!("ObjectId requested but the object-id feature is disabled");
    RefError::Configuration(
        "ObjectId support is not available; enable the `object-id` feature of interval-ddd"
            .to_string(),
    )
}
