// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake message bus for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use async_trait::async_trait;
use interval_ddd::{BusError, DomainEvent, MessageBus};
use std::sync::{Arc, Mutex};

/// Fake message bus that records published events
#[derive(Clone)]
pub struct FakeMessageBus<E> {
    events: Arc<Mutex<Vec<E>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl<E> FakeMessageBus<E> {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Make subsequent publishes fail with the given message
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.into());
    }

    /// Let subsequent publishes succeed again
    pub fn recover(&self) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Number of events published so far
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Clone> FakeMessageBus<E> {
    /// Get all published events
    pub fn events(&self) -> Vec<E> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl<E> Default for FakeMessageBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: DomainEvent> MessageBus<E> for FakeMessageBus<E> {
    async fn publish_domain_event(&self, event: E) -> Result<(), BusError> {
        if let Some(message) = self
            .failure
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(BusError::PublishFailed(message));
        }
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
