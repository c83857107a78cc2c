// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const KNOWN: &str = "507f1f77bcf86cd799439011";

#[test]
fn supplied_value_is_stored_as_is() {
    let id = OidRef::with_value("not an object id");
    assert_eq!(id.value(), "not an object id");
}

#[test]
fn equal_values_are_equal_and_hash_alike() {
    let hash = |id: &OidRef| {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        hasher.finish()
    };
    let a = OidRef::with_value(KNOWN);
    let b = OidRef::from(KNOWN);
    assert_eq!(a, b);
    assert_eq!(hash(&a), hash(&b));
}

#[test]
fn upcasts_to_string_ref_keeping_value() {
    let string_ref: StringRef = OidRef::with_value(KNOWN).into();
    assert_eq!(string_ref, StringRef::new(KNOWN));
}

#[cfg(feature = "object-id")]
mod with_capability {
    use super::*;
    use chrono::{TimeZone, Utc};
    use yare::parameterized;

    #[test]
    fn created_at_decodes_known_timestamp() {
        let id = OidRef::with_value(KNOWN);
        let created_at = id.created_at().unwrap();
        assert_eq!(created_at.timestamp(), 0x507f_1f77);
        assert_eq!(
            created_at.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2012, 10, 17, 21, 13, 27).unwrap()
        );
    }

    #[test]
    fn typed_value_round_trips_hex() {
        let id = OidRef::with_value(KNOWN);
        assert_eq!(id.typed_value().unwrap().to_hex(), KNOWN);
    }

    #[test]
    fn fresh_object_id_is_24_hex_chars_created_now() {
        let id = OidRef::new().unwrap();
        assert_eq!(id.value().len(), 24);
        assert!(id.value().chars().all(|c| c.is_ascii_hexdigit()));

        let age = Utc::now().timestamp() - id.created_at().unwrap().timestamp();
        assert!((0..=2).contains(&age), "age was {age}s");
    }

    #[test]
    fn fresh_object_ids_are_unique() {
        assert_ne!(OidRef::new().unwrap(), OidRef::new().unwrap());
    }

    #[test]
    fn injected_generator_is_used() {
        let id = OidRef::generate_with(&crate::id::ObjectIdGen);
        assert!(id.typed_value().is_ok());
    }

    #[parameterized(
        too_short = { "507f1f77" },
        not_hex = { "507f1f77bcf86cd79943901z" },
        too_long = { "507f1f77bcf86cd79943901100" },
    )]
    fn malformed_value_fails_at_decode(value: &str) {
        let id = OidRef::with_value(value);
        assert!(matches!(id.typed_value(), Err(RefError::InvalidObjectId { .. })));
        assert!(matches!(id.created_at(), Err(RefError::InvalidObjectId { .. })));
    }
}

#[cfg(not(feature = "object-id"))]
mod without_capability {
    use super::*;

    #[test]
    fn generation_fails_with_configuration_error() {
        assert!(matches!(OidRef::new(), Err(RefError::Configuration(_))));
    }

    #[test]
    fn decoding_fails_with_configuration_error() {
        let id = OidRef::with_value(KNOWN);
        assert!(matches!(id.typed_value(), Err(RefError::Configuration(_))));
        assert!(matches!(id.created_at(), Err(RefError::Configuration(_))));
    }
}
