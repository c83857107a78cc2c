// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced message bus wrapper for consistent observability

use async_trait::async_trait;
use interval_ddd::{BusError, DomainEvent, MessageBus};
use tracing::Instrument;

/// Wrapper that adds tracing to any MessageBus
#[derive(Clone)]
pub struct TracedMessageBus<B> {
    inner: B,
}

impl<B> TracedMessageBus<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

#[async_trait]
impl<E, B> MessageBus<E> for TracedMessageBus<B>
where
    E: DomainEvent,
    B: MessageBus<E>,
{
    async fn publish_domain_event(&self, event: E) -> Result<(), BusError> {
        let span = tracing::info_span!("bus.publish", event = event.event_name());

        async move {
            tracing::debug!(?event, "publishing");

            let start = std::time::Instant::now();
            let result = self.inner.publish_domain_event(event).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "published"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "publish failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
