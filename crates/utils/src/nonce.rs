// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Random fixed-length strings

use rand::seq::IndexedRandom;
use thiserror::Error;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NonceError {
    #[error("invalid length: prefix and suffix exceed {0} characters")]
    InvalidLength(usize),
    #[error("invalid chars: no character set selected")]
    InvalidChars,
}

/// Character sources and fixed parts of a nonce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonceOptions {
    /// Character kinds: `u` upper case, `l` lower case, `d` digits.
    pub chars: String,
    /// Explicit character set; overrides `chars` when non-empty.
    pub population: String,
    pub prefix: String,
    pub suffix: String,
}

impl Default for NonceOptions {
    fn default() -> Self {
        Self {
            chars: "uld".to_string(),
            population: String::new(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl NonceOptions {
    pub fn chars(mut self, chars: impl Into<String>) -> Self {
        self.chars = chars.into();
        self
    }

    pub fn population(mut self, population: impl Into<String>) -> Self {
        self.population = population.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    fn character_set(&self) -> Vec<char> {
        if !self.population.is_empty() {
            return self.population.chars().collect();
        }
        let mut set = Vec::new();
        for (kind, source) in [('u', UPPERCASE), ('l', LOWERCASE), ('d', DIGITS)] {
            if self.chars.contains(kind) {
                set.extend(source.chars());
            }
        }
        set
    }
}

/// Generate a string of exactly `length` characters: prefix, random part,
/// suffix. Characters are drawn with replacement.
pub fn generate_nonce(length: usize, options: &NonceOptions) -> Result<String, NonceError> {
    let fixed = options.prefix.chars().count() + options.suffix.chars().count();
    let random_len = length
        .checked_sub(fixed)
        .ok_or(NonceError::InvalidLength(length))?;
    if random_len == 0 {
        return Ok(format!("{}{}", options.prefix, options.suffix));
    }

    let set = options.character_set();
    if set.is_empty() {
        return Err(NonceError::InvalidChars);
    }

    let mut rng = rand::rng();
    let mut nonce = String::with_capacity(length);
    nonce.push_str(&options.prefix);
    for _ in 0..random_len {
        if let Some(c) = set.choose(&mut rng) {
            nonce.push(*c);
        }
    }
    nonce.push_str(&options.suffix);
    Ok(nonce)
}

#[cfg(test)]
#[path = "nonce_tests.rs"]
mod tests;
