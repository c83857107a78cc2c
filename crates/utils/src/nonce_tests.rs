// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[test]
fn default_uses_letters_and_digits() {
    let nonce = generate_nonce(64, &NonceOptions::default()).unwrap();
    assert_eq!(nonce.len(), 64);
    assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[parameterized(
    upper = { "u", UPPERCASE },
    lower = { "l", LOWERCASE },
    digits = { "d", DIGITS },
    upper_digits = { "ud", "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789" },
)]
fn chars_select_character_kinds(chars: &str, allowed: &str) {
    let nonce = generate_nonce(32, &NonceOptions::default().chars(chars)).unwrap();
    assert!(nonce.chars().all(|c| allowed.contains(c)), "{nonce}");
}

#[test]
fn population_overrides_chars() {
    let options = NonceOptions::default().chars("u").population("xy");
    let nonce = generate_nonce(20, &options).unwrap();
    assert!(nonce.chars().all(|c| c == 'x' || c == 'y'));
}

#[test]
fn prefix_and_suffix_count_toward_length() {
    let options = NonceOptions::default().prefix("ord-").suffix("!");
    let nonce = generate_nonce(12, &options).unwrap();
    assert_eq!(nonce.chars().count(), 12);
    assert!(nonce.starts_with("ord-"));
    assert!(nonce.ends_with('!'));
}

#[test]
fn no_random_part_returns_fixed_parts() {
    let options = NonceOptions::default().prefix("ab").suffix("cd").chars("");
    assert_eq!(generate_nonce(4, &options).unwrap(), "abcd");
}

#[test]
fn fixed_parts_longer_than_length_fail() {
    let options = NonceOptions::default().prefix("abc");
    assert_eq!(generate_nonce(2, &options), Err(NonceError::InvalidLength(2)));
}

#[test]
fn no_character_set_fails() {
    let options = NonceOptions::default().chars("x");
    assert_eq!(generate_nonce(8, &options), Err(NonceError::InvalidChars));
}

#[test]
fn zero_length_is_empty() {
    assert_eq!(generate_nonce(0, &NonceOptions::default()).unwrap(), "");
}

proptest! {
    #[test]
    fn nonce_has_requested_length(length in 0usize..128, prefix in "[a-z]{0,4}") {
        let options = NonceOptions::default().prefix(prefix.clone());
        match generate_nonce(length, &options) {
            Ok(nonce) => {
                prop_assert_eq!(nonce.chars().count(), length);
                prop_assert!(nonce.starts_with(&prefix));
            }
            Err(e) => {
                prop_assert!(length < prefix.len());
                prop_assert_eq!(e, NonceError::InvalidLength(length));
            }
        }
    }
}
