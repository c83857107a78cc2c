// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ID generation abstractions

use crate::clock::{Clock, SystemClock};
use std::sync::Arc;
use uuid::{ContextV1, Timestamp, Uuid};

/// Generates identifier strings in their canonical hex form
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> String;
}

/// Time-based UUID (version 1) generator
///
/// Every value combines the clock's current time, a per-generator clock
/// sequence and a 6-byte node id, rendered as 32 lowercase hex characters.
/// Clones share the clock sequence counter.
///
/// Version 1 timestamps here start at the Unix epoch: a clock reading
/// before 1970-01-01T00:00:00Z is clamped to the epoch and logged as a
/// warning.
#[derive(Clone)]
pub struct UuidV1Gen<C: Clock = SystemClock> {
    clock: C,
    node_id: [u8; 6],
    context: Arc<ContextV1>,
}

impl UuidV1Gen<SystemClock> {
    /// Generator with a random node id and a random initial clock sequence
    pub fn new() -> Self {
        Self::with_clock(SystemClock, random_node_id(), rand::random())
    }
}

impl Default for UuidV1Gen<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> UuidV1Gen<C> {
    pub fn with_clock(clock: C, node_id: [u8; 6], clock_sequence: u16) -> Self {
        Self {
            clock,
            node_id,
            context: Arc::new(ContextV1::new(clock_sequence)),
        }
    }

    pub fn node_id(&self) -> [u8; 6] {
        self.node_id
    }
}

impl<C: Clock> IdGen for UuidV1Gen<C> {
    fn next(&self) -> String {
        let now = self.clock.now();
        let (seconds, nanos) = match u64::try_from(now.timestamp()) {
            Ok(seconds) => (seconds, now.timestamp_subsec_nanos()),
            Err(_) => {
                tracing::warn!(
                    clock = %now,
                    "clock reads before the Unix epoch, clamping uuid v1 time"
                );
                (0, 0)
            }
        };
        let ts = Timestamp::from_unix(self.context.as_ref(), seconds, nanos);
        let id = Uuid::new_v1(ts, &self.node_id).simple().to_string();
        tracing::trace!(id = %id, "generated uuid v1");
        id
    }
}

/// A random node id with the multicast bit set, so it can never collide
/// with a real IEEE 802 MAC address.
pub fn random_node_id() -> [u8; 6] {
    let mut node: [u8; 6] = rand::random();
    node[0] |= 0x01;
    node
}

/// ObjectId generator backed by the `bson` crate
#[cfg(feature = "object-id")]
#[derive(Clone, Default)]
pub struct ObjectIdGen;

#[cfg(feature = "object-id")]
impl IdGen for ObjectIdGen {
    fn next(&self) -> String {
        let id = bson::oid::ObjectId::new().to_hex();
        tracing::trace!(id = %id, "generated object id");
        id
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
