// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Value object root
//!
//! A value object is defined entirely by its fields: it is immutable once
//! built and compares and hashes structurally. Implementors keep their fields
//! private (or the type `Copy`) and expose no mutators.

use std::fmt::Debug;
use std::hash::Hash;

/// Immutable value compared by its fields
pub trait ValueObject: Clone + Debug + Eq + Hash {
    /// Build a value from nullable composite components.
    ///
    /// Returns `None` only when every component is `None`. If at least one
    /// component is present the value is built from all of them, absent
    /// ones included; partial combinations are not rejected.
    fn composite_factory<C>(components: C) -> Option<Self>
    where
        C: CompositeComponents,
        Self: From<C>,
    {
        components.any_present().then(|| Self::from(components))
    }
}

/// A tuple of nullable columns backing a composite value
pub trait CompositeComponents {
    fn any_present(&self) -> bool;
}

impl<A> CompositeComponents for Option<A> {
    fn any_present(&self) -> bool {
        self.is_some()
    }
}

macro_rules! impl_composite_components {
    ($($name:ident $idx:tt),+) => {
        impl<$($name),+> CompositeComponents for ($(Option<$name>,)+) {
            fn any_present(&self) -> bool {
                false $(|| self.$idx.is_some())+
            }
        }
    };
}

impl_composite_components!(A 0);
impl_composite_components!(A 0, B 1);
impl_composite_components!(A 0, B 1, C 2);
impl_composite_components!(A 0, B 1, C 2, D 3);
impl_composite_components!(A 0, B 1, C 2, D 3, E 4);
impl_composite_components!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_composite_components!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_composite_components!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

#[cfg(test)]
#[path = "value_object_tests.rs"]
mod tests;
