// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! interval-ddd: building blocks for domain-driven design
//!
//! This crate provides:
//! - The `ValueObject` root and its nullable composite factory
//! - Nominal identity references over integers, strings, version 1 UUIDs
//!   and ObjectIds, with creation-time decoding
//! - Injectable clocks and identifier generators
//! - The `MessageBus` interface aggregates publish domain events through
//!
//! ObjectId support is the default `object-id` feature. The behaviour
//! without it (configuration errors from `OidRef`) is only covered by
//! `cargo test -p interval-ddd --no-default-features`.

pub mod clock;
pub mod config;
pub mod error;
pub mod id;
pub mod messagebus;
pub mod reference;
pub mod value_object;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::IdentityConfig;
pub use error::{ConfigError, RefError};
pub use id::{IdGen, UuidV1Gen};
pub use messagebus::{BusError, DomainEvent, MessageBus};
pub use reference::{IntegerRef, ObjectId, OidRef, Reference, StringRef, UuidRef};
pub use value_object::{CompositeComponents, ValueObject};

#[cfg(feature = "object-id")]
pub use id::ObjectIdGen;

// Used by the `string_ref!` and `integer_ref!` expansions
#[doc(hidden)]
pub mod __private {
    pub use serde;
}
