// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message bus interface
//!
//! Aggregates publish domain events through a [`MessageBus`] once their
//! state changes are committed. Transports live outside this crate.

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Marker for records of something that happened within a bounded context
pub trait DomainEvent: Debug + Send + Sync + 'static {
    /// Name used when logging the event
    fn event_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Errors reported by message bus implementations
#[derive(Debug, Error)]
pub enum BusError {
    #[error("publish failed: {0}")]
    PublishFailed(String),
    #[error("message bus unavailable: {0}")]
    Unavailable(String),
}

/// Publishes domain events
#[async_trait]
pub trait MessageBus<E: DomainEvent>: Send + Sync {
    async fn publish_domain_event(&self, event: E) -> Result<(), BusError>;
}

#[async_trait]
impl<E: DomainEvent, B: MessageBus<E> + ?Sized> MessageBus<E> for Box<B> {
    async fn publish_domain_event(&self, event: E) -> Result<(), BusError> {
        (**self).publish_domain_event(event).await
    }
}

#[async_trait]
impl<E: DomainEvent, B: MessageBus<E> + ?Sized> MessageBus<E> for Arc<B> {
    async fn publish_domain_event(&self, event: E) -> Result<(), BusError> {
        (**self).publish_domain_event(event).await
    }
}

#[cfg(test)]
#[path = "messagebus_tests.rs"]
mod tests;
