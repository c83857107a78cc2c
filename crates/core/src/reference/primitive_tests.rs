// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::Reference;
use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_values_are_equal_and_hash_alike() {
    assert_eq!(IntegerRef::new(1), IntegerRef::new(1));
    assert_eq!(hash_of(&IntegerRef::new(1)), hash_of(&IntegerRef::new(1)));
    assert_eq!(StringRef::new("a"), StringRef::from("a".to_string()));
    assert_eq!(hash_of(&StringRef::new("a")), hash_of(&StringRef::from("a")));
}

#[test]
fn different_values_are_not_equal() {
    assert_ne!(IntegerRef::new(1), IntegerRef::new(2));
    assert_ne!(StringRef::new("a"), StringRef::new("b"));
}

#[test]
fn integer_and_string_refs_are_distinct_types() {
    let int_ref: Box<dyn Any> = Box::new(IntegerRef::new(1));
    assert!(int_ref.downcast_ref::<StringRef>().is_none());
    assert_eq!(int_ref.downcast_ref::<IntegerRef>(), Some(&IntegerRef::new(1)));
}

#[test]
fn refs_deduplicate_in_sets() {
    let set: HashSet<StringRef> = ["x", "y", "x"].into_iter().map(StringRef::from).collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn refs_expose_value_read_only() {
    let id = StringRef::new("order-7");
    assert_eq!(id.value(), "order-7");
    assert_eq!(id.as_value(), "order-7");
    assert_eq!(id.to_string(), "order-7");
    assert_eq!(id.into_inner(), "order-7");

    let no = IntegerRef::new(-3);
    assert_eq!(no.value(), -3);
    assert_eq!(*no.as_value(), -3);
    assert_eq!(no.to_string(), "-3");
}

#[test]
fn refs_serialize_transparently() {
    assert_eq!(serde_json::to_string(&IntegerRef::new(42)).unwrap(), "42");
    assert_eq!(serde_json::to_string(&StringRef::new("k")).unwrap(), "\"k\"");

    let parsed: StringRef = serde_json::from_str("\"k\"").unwrap();
    assert_eq!(parsed, StringRef::new("k"));
    let parsed: IntegerRef = serde_json::from_str("42").unwrap();
    assert_eq!(parsed, IntegerRef::new(42));
}

crate::string_ref! {
    struct CustomerId;
}

#[test]
fn declared_refs_are_nominal() {
    let customer: Box<dyn Any> = Box::new(CustomerId::new("1"));
    assert!(customer.downcast_ref::<StringRef>().is_none());
    assert_eq!(CustomerId::new("1").value(), StringRef::new("1").value());
}
