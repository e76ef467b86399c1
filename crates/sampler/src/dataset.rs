use std::fmt;
use std::path::Path;

use charlm_core::{ConfigError, Device, Error, Result};
use rand::Rng;
use tokenize::CharTokenizer;

use crate::corpus::read_corpus;
use crate::tensor::{Batch, TokenTensor};

/// Whole corpus encoded once, plus the sequence length to sample.
///
/// Immutable after construction. Sampling takes the generator as an argument,
/// so one dataset can serve any number of loaders at once.
#[derive(Clone, Debug)]
pub struct TextDataset {
    tokenizer: CharTokenizer,
    tokens: Vec<usize>,
    seq_length: usize,
}

/// Sizes reported after loading a corpus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetStats {
    /// Corpus length in characters
    pub corpus_len: usize,
    /// Distinct characters
    pub vocab_size: usize,
    /// Encoded tokens (equals `corpus_len`)
    pub tokens: usize,
}

impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loaded text with {} characters", self.corpus_len)?;
        writeln!(f, "Vocabulary size: {}", self.vocab_size)?;
        write!(f, "Total tokens: {}", self.tokens)
    }
}

impl TextDataset {
    /// Build the vocabulary from `corpus` and encode all of it.
    ///
    /// The corpus must be strictly longer than `seq_length`: a target needs one
    /// trailing token past its input.
    pub fn new(corpus: &str, seq_length: usize) -> Result<Self> {
        if seq_length == 0 {
            return Err(ConfigError::ZeroSeqLength.into());
        }
        let corpus_len = corpus.chars().count();
        if corpus_len <= seq_length {
            return Err(ConfigError::CorpusTooSmall {
                corpus_len,
                seq_length,
            }
            .into());
        }

        let tokenizer = CharTokenizer::new(corpus)?;
        let tokens = tokenizer.encode(corpus)?;
        tracing::info!(
            corpus_len,
            vocab_size = tokenizer.vocab_size(),
            tokens = tokens.len(),
            seq_length,
            "encoded corpus"
        );

        Ok(Self {
            tokenizer,
            tokens,
            seq_length,
        })
    }

    /// Read a UTF-8 corpus file and build the dataset from it.
    pub fn from_path(path: impl AsRef<Path>, seq_length: usize) -> Result<Self> {
        let path = path.as_ref();
        let text = read_corpus(path)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read corpus");
        Self::new(&text, seq_length)
    }

    /// Tokenizer built from the corpus.
    pub fn tokenizer(&self) -> &CharTokenizer {
        &self.tokenizer
    }

    /// Encoded corpus.
    pub fn tokens(&self) -> &[usize] {
        &self.tokens
    }

    /// Length of every sampled sequence.
    pub fn seq_length(&self) -> usize {
        self.seq_length
    }

    /// Corpus length in characters.
    pub fn corpus_len(&self) -> usize {
        self.tokens.len()
    }

    /// Vocabulary size of the underlying tokenizer.
    pub fn vocab_size(&self) -> usize {
        self.tokenizer.vocab_size()
    }

    /// Sizes for status output.
    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            corpus_len: self.corpus_len(),
            vocab_size: self.vocab_size(),
            tokens: self.tokens.len(),
        }
    }

    /// Largest start offset whose target still fits, inclusive.
    pub fn max_start(&self) -> usize {
        // construction guarantees tokens.len() > seq_length
        self.tokens.len() - self.seq_length - 1
    }

    /// Draw `batch_size` start offsets, each uniform over `[0, max_start]`,
    /// with replacement.
    pub fn sample_starts<R: Rng + ?Sized>(
        &self,
        batch_size: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        if batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize { batch_size }.into());
        }
        let max_start = self.max_start();
        Ok((0..batch_size)
            .map(|_| rng.gen_range(0..=max_start))
            .collect())
    }

    /// Sequence pair starting at `start`: `(tokens[start..start + seq_length],
    /// tokens[start + 1..start + seq_length + 1])`.
    pub fn pair_at(&self, start: usize) -> Option<(&[usize], &[usize])> {
        if start > self.max_start() {
            return None;
        }
        let input = self.tokens.get(start..start + self.seq_length)?;
        let target = self.tokens.get(start + 1..start + self.seq_length + 1)?;
        Some((input, target))
    }

    /// Batch made of the pairs at `starts`, in order, on the CPU.
    pub fn batch_at(&self, starts: &[usize]) -> Result<Batch> {
        if starts.is_empty() {
            return Err(ConfigError::InvalidBatchSize { batch_size: 0 }.into());
        }
        let width = starts.len() * self.seq_length;
        let mut inputs = Vec::with_capacity(width);
        let mut targets = Vec::with_capacity(width);
        for &start in starts {
            let (x, y) = self.pair_at(start).ok_or_else(|| {
                Error::from(ConfigError::StartOutOfRange {
                    start,
                    max_start: self.max_start(),
                })
            })?;
            inputs.extend_from_slice(x);
            targets.extend_from_slice(y);
        }
        Ok(Batch {
            inputs: TokenTensor::from_raw(inputs, starts.len(), self.seq_length, Device::Cpu),
            targets: TokenTensor::from_raw(targets, starts.len(), self.seq_length, Device::Cpu),
        })
    }

    /// Draw a batch of `batch_size` independent pairs on the CPU.
    pub fn sample_batch<R: Rng + ?Sized>(
        &self,
        batch_size: usize,
        rng: &mut R,
    ) -> Result<Batch> {
        let starts = self.sample_starts(batch_size, rng)?;
        self.batch_at(&starts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charlm_core::make_rng;
    use proptest::prelude::*;

    const CORPUS: &str = "First Citizen:\nBefore we proceed any further, hear me speak.\n";

    #[test]
    fn corpus_must_exceed_seq_length() {
        let exact = "a".repeat(32);
        match TextDataset::new(&exact, 32) {
            Err(Error::Config(ConfigError::CorpusTooSmall {
                corpus_len,
                seq_length,
            })) => {
                assert_eq!(corpus_len, 32);
                assert_eq!(seq_length, 32);
            }
            other => panic!("expected CorpusTooSmall, got {other:?}"),
        }
        assert!(TextDataset::new("short", 32).unwrap_err().is_config());
        assert!(TextDataset::new(&"a".repeat(33), 32).is_ok());
    }

    #[test]
    fn empty_corpus_and_zero_seq_are_config_errors() {
        assert!(TextDataset::new("", 1).unwrap_err().is_config());
        assert!(matches!(
            TextDataset::new(CORPUS, 0),
            Err(Error::Config(ConfigError::ZeroSeqLength))
        ));
    }

    #[test]
    fn corpus_length_counts_chars() {
        let ds = TextDataset::new("ünïcödé text!", 4).unwrap();
        assert_eq!(ds.corpus_len(), 13);
        assert_eq!(ds.tokens().len(), 13);
        assert_eq!(ds.max_start(), 8);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let ds = TextDataset::new(CORPUS, 8).unwrap();
        let mut rng = make_rng(0);
        assert!(matches!(
            ds.sample_batch(0, &mut rng),
            Err(Error::Config(ConfigError::InvalidBatchSize { batch_size: 0 }))
        ));
    }

    #[test]
    fn pair_at_last_offset_reaches_corpus_end() {
        let ds = TextDataset::new("abcdef", 3).unwrap();
        assert_eq!(ds.max_start(), 2);
        let (x, y) = ds.pair_at(2).unwrap();
        assert_eq!(ds.tokenizer().decode(x).unwrap(), "cde");
        assert_eq!(ds.tokenizer().decode(y).unwrap(), "def");
        assert!(ds.pair_at(3).is_none());
    }

    #[test]
    fn batch_at_rejects_bad_offset() {
        let ds = TextDataset::new("abcdef", 3).unwrap();
        match ds.batch_at(&[0, 3]) {
            Err(Error::Config(ConfigError::StartOutOfRange { start, max_start })) => {
                assert_eq!((start, max_start), (3, 2));
            }
            other => panic!("expected StartOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn every_offset_is_reachable() {
        let ds = TextDataset::new("abcdefghij", 3).unwrap();
        let mut rng = make_rng(7);
        let mut counts = vec![0usize; ds.max_start() + 1];
        for s in ds.sample_starts(2000, &mut rng).unwrap() {
            counts[s] += 1;
        }
        // 7 offsets, ~285 draws each
        for (offset, &n) in counts.iter().enumerate() {
            assert!(n > 150, "offset {offset} drawn {n} times: {counts:?}");
        }
    }

    #[test]
    fn sample_batch_uses_drawn_offsets() {
        let ds = TextDataset::new(CORPUS, 16).unwrap();
        let starts = ds.sample_starts(5, &mut make_rng(11)).unwrap();
        let batch = ds.sample_batch(5, &mut make_rng(11)).unwrap();
        assert_eq!(batch, ds.batch_at(&starts).unwrap());
        assert_eq!(batch.device(), Device::Cpu);
    }

    #[test]
    fn stats_render_three_lines() {
        let ds = TextDataset::new("hello world", 4).unwrap();
        let text = ds.stats().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Loaded text with 11 characters",
                "Vocabulary size: 8",
                "Total tokens: 11",
            ]
        );
    }

    proptest! {
        #[test]
        fn pairs_are_shifted_and_in_bounds(
            corpus in "[a-z ,.]{10,200}",
            seq_length in 1usize..9,
            batch_size in 1usize..16,
            seed in any::<u64>(),
        ) {
            let ds = TextDataset::new(&corpus, seq_length).unwrap();
            let starts = ds.sample_starts(batch_size, &mut make_rng(seed)).unwrap();
            prop_assert!(starts.iter().all(|&s| s <= ds.max_start()));
            prop_assert!(starts.iter().all(|&s| s + seq_length < ds.tokens().len()));

            let batch = ds.sample_batch(batch_size, &mut make_rng(seed)).unwrap();
            prop_assert_eq!(batch.inputs.shape(), [batch_size, seq_length]);
            prop_assert_eq!(batch.targets.shape(), [batch_size, seq_length]);
            for (i, &s) in starts.iter().enumerate() {
                let x = batch.inputs.row(i).unwrap();
                let y = batch.targets.row(i).unwrap();
                prop_assert_eq!(&x[1..], &y[..seq_length - 1]);
                prop_assert_eq!(x, &ds.tokens()[s..s + seq_length]);
                prop_assert_eq!(y, &ds.tokens()[s + 1..s + seq_length + 1]);
            }
        }
    }
}
