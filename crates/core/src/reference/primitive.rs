// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain integer and string references

crate::integer_ref! {
    /// Unique identifier backed by an integer
    pub struct IntegerRef;
}

crate::string_ref! {
    /// Unique identifier backed by a string
    pub struct StringRef;
}

#[cfg(test)]
#[path = "primitive_tests.rs"]
mod tests;
