use std::sync::Arc;

use charlm_core::{entropy_rng, make_rng, DefaultRng, Device, Result};
use rand::Rng;

use crate::dataset::TextDataset;
use crate::tensor::Batch;

/// Dataset bound to a batch size, a device and its own generator.
///
/// The dataset is shared read-only; each loader owns its generator, so loaders
/// over the same dataset never contend.
#[derive(Debug)]
pub struct DataLoader<R = DefaultRng> {
    dataset: Arc<TextDataset>,
    batch_size: usize,
    device: Device,
    rng: R,
}

impl DataLoader<DefaultRng> {
    /// Loader with an entropy-seeded generator. `batch_size` is checked on
    /// the first [`DataLoader::next_batch`].
    pub fn new(dataset: Arc<TextDataset>, batch_size: usize, device: Device) -> Self {
        Self::with_rng(dataset, batch_size, device, entropy_rng())
    }

    /// Loader whose batches are reproducible for a given `seed`.
    pub fn seeded(dataset: Arc<TextDataset>, batch_size: usize, device: Device, seed: u64) -> Self {
        Self::with_rng(dataset, batch_size, device, make_rng(seed))
    }
}

impl<R: Rng> DataLoader<R> {
    /// Loader drawing from a caller-supplied generator.
    pub fn with_rng(dataset: Arc<TextDataset>, batch_size: usize, device: Device, rng: R) -> Self {
        Self {
            dataset,
            batch_size,
            device,
            rng,
        }
    }

    /// Sample `batch_size` pairs and place them on the loader's device.
    pub fn next_batch(&mut self) -> Result<Batch> {
        let batch = self.dataset.sample_batch(self.batch_size, &mut self.rng)?;
        Ok(batch.to_device(self.device))
    }

    /// Vocabulary size of the dataset's tokenizer.
    pub fn vocab_size(&self) -> usize {
        self.dataset.tokenizer().vocab_size()
    }

    /// Pairs per batch.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Device batches are placed on.
    pub fn device(&self) -> Device {
        self.device
    }

    /// Underlying dataset.
    pub fn dataset(&self) -> &Arc<TextDataset> {
        &self.dataset
    }
}
