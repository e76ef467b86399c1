#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing))]

//! Training-pair sampling over a whole, in-memory character corpus.
//!
//! Layout:
//! - `corpus.rs` reads a UTF-8 corpus file
//! - `dataset.rs` holds `TextDataset`, the encoded corpus and the sampler
//! - `tensor.rs` holds `TokenTensor` and `Batch`, the row-major token buffers
//! - `loader.rs` holds `DataLoader`, bound to a batch size, device and RNG
//!
//! Every draw picks a start offset `s` uniformly from `[0, len - seq_length - 1]`
//! and yields `input = tokens[s..s + seq_length]`, `target = tokens[s + 1..s + seq_length + 1]`.

/// Corpus file reading.
pub mod corpus;
/// Encoded corpus and batch sampling.
pub mod dataset;
/// Batch-size and device bound loader.
pub mod loader;
/// Token buffers.
pub mod tensor;

pub use corpus::read_corpus;
pub use dataset::{DatasetStats, TextDataset};
pub use loader::DataLoader;
pub use tensor::{Batch, TokenTensor};
