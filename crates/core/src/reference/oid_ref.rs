// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ObjectId reference
//!
//! The stored value is the 24-character lowercase hex form of a 12-byte
//! ObjectId: a 4-byte big-endian Unix timestamp in seconds followed by
//! 5 bytes of machine/process discriminator and a 3-byte counter.

use super::object_id::{self, ObjectId};
use super::StringRef;
use crate::error::RefError;
use crate::id::IdGen;
use chrono::{DateTime, Local};

crate::string_ref! {
    @common
    /// Unique identifier backed by an ObjectId
    pub struct OidRef;
}

impl OidRef {
    /// Generate a fresh ObjectId.
    ///
    /// Fails with [`RefError::Configuration`] when ObjectId support is not
    /// compiled in.
    pub fn new() -> Result<Self, RefError> {
        object_id::generate().map(Self)
    }

    pub fn generate_with(id_gen: &impl IdGen) -> Self {
        Self(id_gen.next())
    }

    /// Parse the stored hex into an ObjectId
    pub fn typed_value(&self) -> Result<ObjectId, RefError> {
        object_id::parse(&self.0)
    }

    /// Creation time encoded in the ObjectId, in the local time zone.
    /// Second precision only.
    pub fn created_at(&self) -> Result<DateTime<Local>, RefError> {
        let oid = self.typed_value()?;
        let seconds = object_id::timestamp_seconds(&oid);
        DateTime::from_timestamp(i64::from(seconds), 0)
            .map(|utc| utc.with_timezone(&Local))
            .ok_or_else(|| RefError::TimestampOutOfRange {
                value: self.0.clone(),
            })
    }
}

impl From<OidRef> for StringRef {
    fn from(id: OidRef) -> Self {
        StringRef::new(id.0)
    }
}

#[cfg(test)]
#[path = "oid_ref_tests.rs"]
mod tests;
