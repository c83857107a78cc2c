// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Format checks for common contact and identity fields
//!
//! Each check is a full-string match; no normalisation is applied.

use regex::Regex;
use std::sync::LazyLock;

// Constant valid pattern; allow expect since it can only fail on a typo here
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("constant regex pattern is valid"));

/// Mainland China mobile numbers
#[allow(clippy::expect_used)]
static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("constant regex pattern is valid"));

/// 18-digit resident ID: region, birth date, sequence, check digit
#[allow(clippy::expect_used)]
static ID_CARD_18_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-9]\d{5}[12]\d{3}(0[1-9]|1[0-2])(0[1-9]|[12]\d|3[01])\d{3}[\dxX]$")
        .expect("constant regex pattern is valid")
});

/// First-generation 15-digit resident ID with a two-digit year
#[allow(clippy::expect_used)]
static ID_CARD_15_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-9]\d{7}(0[1-9]|1[0-2])(0[1-9]|[12]\d|3[01])\d{3}$")
        .expect("constant regex pattern is valid")
});

pub fn check_email_address(address: &str) -> bool {
    EMAIL_PATTERN.is_match(address)
}

pub fn check_mobile_number(number: &str) -> bool {
    MOBILE_PATTERN.is_match(number)
}

pub fn check_id_card_number(number: &str) -> bool {
    match number.chars().count() {
        18 => ID_CARD_18_PATTERN.is_match(number),
        15 => ID_CARD_15_PATTERN.is_match(number),
        _ => false,
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
