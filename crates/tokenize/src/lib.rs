#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing))]

//! Character-level tokenization.
//!
//! The vocabulary is every distinct character of a training corpus in
//! code-point order. It is fixed at construction: text outside it is an error,
//! never an "unknown" token.

/// `CharTokenizer`: vocabulary, encode and decode.
pub mod tokenizer;
/// Saving and loading a tokenizer's vocabulary.
pub mod persist;

pub use tokenizer::CharTokenizer;
