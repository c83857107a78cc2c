// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identity references
//!
//! Nominal identifier types wrapping a single primitive. Two references of
//! different types never compare equal, even over the same primitive: the
//! comparison does not type-check.
//!
//! ```compile_fail
//! use interval_ddd::{IntegerRef, StringRef};
//! assert!(IntegerRef::new(1) != StringRef::new("1"));
//! ```
//!
//! ```compile_fail
//! use interval_ddd::{StringRef, UuidRef};
//! let id = UuidRef::new();
//! assert!(id != StringRef::new(id.value()));
//! ```

mod object_id;
mod oid_ref;
mod primitive;
mod uuid_ref;

pub use object_id::ObjectId;
pub use oid_ref::OidRef;
pub use primitive::{IntegerRef, StringRef};
pub use uuid_ref::UuidRef;

use crate::value_object::ValueObject;

/// Common access to the primitive behind an identity reference
pub trait Reference: ValueObject {
    type Value: ?Sized;

    fn as_value(&self) -> &Self::Value;
}

/// Declare a nominal identifier over a string.
///
/// ```
/// interval_ddd::string_ref! {
///     /// Identifier of an order
///     pub struct OrderId;
/// }
///
/// let id = OrderId::new("o-1");
/// assert_eq!(id.value(), "o-1");
/// ```
#[macro_export]
macro_rules! string_ref {
    (@common $(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name(String);

        impl $name {
            /// Wrap a value as-is; the format is not checked here.
            pub fn with_value(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn value(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl $crate::ValueObject for $name {}

        impl $crate::Reference for $name {
            type Value = str;

            fn as_value(&self) -> &str {
                &self.0
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <String as $crate::__private::serde::Deserialize>::deserialize(deserializer).map(Self)
            }
        }
    };
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $crate::string_ref!(@common $(#[$meta])* $vis struct $name;);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self::with_value(value)
            }
        }
    };
}

/// Declare a nominal identifier over an integer.
///
/// ```
/// interval_ddd::integer_ref! {
///     pub struct TenantNo;
/// }
///
/// assert_eq!(TenantNo::new(7).value(), 7);
/// ```
#[macro_export]
macro_rules! integer_ref {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl $crate::ValueObject for $name {}

        impl $crate::Reference for $name {
            type Value = i64;

            fn as_value(&self) -> &i64 {
                &self.0
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_i64(self.0)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <i64 as $crate::__private::serde::Deserialize>::deserialize(deserializer).map(Self)
            }
        }
    };
}
