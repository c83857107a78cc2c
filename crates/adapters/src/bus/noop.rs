// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op message bus for when event publishing is disabled.

use async_trait::async_trait;
use interval_ddd::{BusError, DomainEvent, MessageBus};

/// Message bus that drops every event.
///
/// Used when nothing consumes domain events, e.g. in batch imports.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpMessageBus;

impl NoOpMessageBus {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl<E: DomainEvent> MessageBus<E> for NoOpMessageBus {
    async fn publish_domain_event(&self, event: E) -> Result<(), BusError> {
        tracing::trace!(event = event.event_name(), "dropped");
        Ok(())
    }
}
