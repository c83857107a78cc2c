// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Small helpers shared by services built on interval-ddd

pub mod logging;
pub mod nonce;
pub mod validate;

pub use logging::{LogFormat, LoggingError, StreamLogger};
pub use nonce::{generate_nonce, NonceError, NonceOptions};
pub use validate::{check_email_address, check_id_card_number, check_mobile_number};
