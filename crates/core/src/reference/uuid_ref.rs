// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time-based UUID reference
//!
//! The stored value is the 32-character lowercase hex form of a version 1
//! UUID. The 60-bit timestamp it carries counts 100ns intervals since the
//! Gregorian calendar reform (1582-10-15T00:00:00Z).

use super::StringRef;
use crate::error::RefError;
use crate::id::{IdGen, UuidV1Gen};
use chrono::{DateTime, Local};
use std::sync::LazyLock;
use uuid::Uuid;

/// 100ns intervals between 1582-10-15T00:00:00Z and the Unix epoch
const GREGORIAN_TO_UNIX_TICKS: i64 = 0x01B2_1DD2_1381_4000;

const TICKS_PER_SECOND: i64 = 10_000_000;

static DEFAULT_GEN: LazyLock<UuidV1Gen> = LazyLock::new(UuidV1Gen::new);

crate::string_ref! {
    @common
    /// Unique identifier backed by a version 1 UUID
    pub struct UuidRef;
}

impl UuidRef {
    /// Generate a fresh version 1 UUID with the process-wide generator
    pub fn new() -> Self {
        Self::generate_with(&*DEFAULT_GEN)
    }

    pub fn generate_with(id_gen: &impl IdGen) -> Self {
        Self(id_gen.next())
    }

    /// Parse the stored hex back into a UUID
    pub fn typed_value(&self) -> Result<Uuid, RefError> {
        Uuid::parse_str(&self.0).map_err(|source| RefError::InvalidUuid {
            value: self.0.clone(),
            source,
        })
    }

    /// Creation time encoded in the UUID, in the local time zone
    pub fn created_at(&self) -> Result<DateTime<Local>, RefError> {
        let uuid = self.typed_value()?;
        let (time_low, time_mid, time_hi_and_version, _) = uuid.as_fields();

        let ticks = (u64::from(time_hi_and_version & 0x0FFF) << 48)
            | (u64::from(time_mid) << 32)
            | u64::from(time_low);
        // ticks < 2^60, so the conversion cannot fail
        let unix_ticks = i64::try_from(ticks).unwrap_or(i64::MAX) - GREGORIAN_TO_UNIX_TICKS;

        let seconds = unix_ticks.div_euclid(TICKS_PER_SECOND);
        let nanos = (unix_ticks.rem_euclid(TICKS_PER_SECOND) * 100) as u32;

        DateTime::from_timestamp(seconds, nanos)
            .map(|utc| utc.with_timezone(&Local))
            .ok_or_else(|| RefError::TimestampOutOfRange {
                value: self.0.clone(),
            })
    }
}

impl Default for UuidRef {
    fn default() -> Self {
        Self::new()
    }
}

impl From<UuidRef> for StringRef {
    fn from(id: UuidRef) -> Self {
        StringRef::new(id.0)
    }
}

#[cfg(test)]
#[path = "uuid_ref_tests.rs"]
mod tests;
