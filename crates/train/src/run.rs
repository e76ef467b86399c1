use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use charlm_core::{rng_from, Device};
use sampler::{DataLoader, DatasetStats, TextDataset};
use serde::Serialize;

use crate::config::TrainConfig;
use crate::error::{Result, TrainError};

const CONFIG_FILE: &str = "config.json";

/// What a run prepared.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Corpus sizes
    pub stats: DatasetStats,
    /// Loader vocabulary size
    pub vocab_size: usize,
    /// `[batch_size, seq_length]` of the probe batch
    pub batch_shape: [usize; 2],
    /// Device the probe batch was placed on
    pub device: Device,
    /// Whether the output directory had to be created
    pub created_output_dir: bool,
    /// Where the resolved config was written
    pub config_path: PathBuf,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [rows, cols] = self.batch_shape;
        writeln!(f, "{}", self.stats)?;
        writeln!(f, "Batch shape: [{rows}, {cols}] on {}", self.device)?;
        write!(f, "Config written to {}", self.config_path.display())
    }
}

#[derive(Serialize)]
struct ConfigRecord<'a> {
    #[serde(flatten)]
    config: &'a TrainConfig,
    created_at: String,
}

/// Prepare a run: output directory, config record, dataset, loader and one
/// probe batch.
pub fn run(config: &TrainConfig) -> Result<RunReport> {
    tracing::info!(
        data_path = %config.data_path.display(),
        device = %config.device,
        batch_size = config.batch_size,
        seq_length = config.seq_length,
        lr = config.lr,
        max_steps = config.max_steps,
        "starting training"
    );

    let created_output_dir = ensure_dir(&config.output_dir)?;
    let config_path = write_config(config)?;

    let dataset = Arc::new(TextDataset::from_path(&config.data_path, config.seq_length)?);
    let stats = dataset.stats();
    let mut loader = DataLoader::with_rng(
        dataset,
        config.batch_size,
        config.device,
        rng_from(config.seed),
    );

    let probe = loader.next_batch()?;
    tracing::info!(
        shape = ?probe.inputs.shape(),
        device = %probe.device(),
        vocab_size = loader.vocab_size(),
        "probe batch ready"
    );

    Ok(RunReport {
        stats,
        vocab_size: loader.vocab_size(),
        batch_shape: probe.inputs.shape(),
        device: probe.device(),
        created_output_dir,
        config_path,
    })
}

fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|source| TrainError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::info!(output_dir = %dir.display(), "created output directory");
    Ok(true)
}

fn write_config(config: &TrainConfig) -> Result<PathBuf> {
    let path = config.output_dir.join(CONFIG_FILE);
    let record = ConfigRecord {
        config,
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    let json = serde_json::to_string_pretty(&record)?;
    fs::write(&path, json).map_err(|source| TrainError::WriteConfig {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
