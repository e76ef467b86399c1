use std::path::PathBuf;

use charlm_core::Device;
use serde::{Deserialize, Serialize};

/// Everything a run needs; persisted as `config.json` in the output directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// UTF-8 corpus file
    pub data_path: PathBuf,
    /// Where run artifacts go; created if absent
    pub output_dir: PathBuf,
    /// Sequence pairs per batch
    pub batch_size: usize,
    /// Tokens per sequence (context window)
    pub seq_length: usize,
    /// Learning rate
    pub lr: f64,
    /// Total training steps
    pub max_steps: u64,
    /// Where batches are placed
    pub device: Device,
    /// Sampling seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/tiny.txt"),
            output_dir: PathBuf::from("output"),
            batch_size: 32,
            seq_length: 128,
            lr: 1e-3,
            max_steps: 1000,
            device: Device::Cuda,
            seed: None,
        }
    }
}
