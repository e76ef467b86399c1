#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing))]

//! Training entry point: resolves a [`TrainConfig`], prepares the output
//! directory, loads the corpus and checks that a batch can be drawn.
//!
//! No model is trained here; the loader built by [`run`] is what a training
//! step would consume.

/// Run configuration.
pub mod config;
/// Errors raised while preparing a run.
pub mod error;
/// The `run` entry point and its report.
pub mod run;

pub use config::TrainConfig;
pub use error::{Result, TrainError};
pub use run::{run, RunReport};
