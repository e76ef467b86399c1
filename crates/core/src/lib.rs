#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing))]

//! Shared building blocks for charlm: error kinds, device tags and
//! seeded RNG helpers.
//!
//! Contract: nothing here holds global state. Randomness is always a value
//! the caller owns.

/// Error kinds and the crate-wide `Result` alias.
pub mod error;
/// Execution target for token buffers.
pub mod device;
/// ChaCha-based RNG constructors.
pub mod rng;

pub use device::{Device, ParseDeviceError};
pub use error::{ConfigError, EncodingError, Error, Result};
pub use rng::{entropy_rng, make_rng, rng_from, DefaultRng};
