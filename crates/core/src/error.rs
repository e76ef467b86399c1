//! Error kinds shared by the tokenizer, dataset and loader.
//!
//! Construction problems and vocabulary misses are kept apart so callers can
//! branch on the kind instead of matching message text.

use std::path::PathBuf;

/// Result alias used across the charlm crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid construction-time parameter.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Text or indices outside the vocabulary.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Reading or writing a corpus or vocabulary file failed.
    #[error("io error on {}: {source}", path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// A vocabulary file could not be encoded or decoded.
    #[error("vocabulary file {}: {reason}", path.display())]
    Persist {
        /// File that was being accessed
        path: PathBuf,
        /// What went wrong
        reason: String,
    },
}

impl Error {
    /// True for [`Error::Config`].
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// True for [`Error::Encoding`].
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::Encoding(_))
    }

    /// Wrap an IO error with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Invalid construction-time parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No vocabulary can be built from zero characters.
    #[error("corpus is empty, cannot build a vocabulary")]
    EmptyCorpus,

    /// The corpus does not leave room for one input plus its shifted target.
    #[error(
        "corpus is too small ({corpus_len} chars), must be larger than seq_length ({seq_length})"
    )]
    CorpusTooSmall {
        /// Corpus length in characters
        corpus_len: usize,
        /// Requested sequence length
        seq_length: usize,
    },

    /// Sequences must hold at least one token.
    #[error("seq_length must be at least 1, got 0")]
    ZeroSeqLength,

    /// Batches must hold at least one sequence pair.
    #[error("batch_size must be at least 1, got {batch_size}")]
    InvalidBatchSize {
        /// Requested batch size
        batch_size: usize,
    },

    /// An explicit start offset leaves no room for the shifted target.
    #[error("start offset {start} is past the last valid offset {max_start}")]
    StartOutOfRange {
        /// Requested offset
        start: usize,
        /// Largest offset with a full input and target
        max_start: usize,
    },

    /// A stored vocabulary is empty, unsorted or has duplicates.
    #[error("invalid vocabulary: {reason}")]
    InvalidVocab {
        /// What is wrong with it
        reason: String,
    },
}

/// Text or indices that fall outside the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// Input text has a character the vocabulary was not built with.
    #[error("character {ch:?} not found in vocabulary, available characters: {vocab:?}")]
    UnknownChar {
        /// Offending character
        ch: char,
        /// Full sorted vocabulary
        vocab: Vec<char>,
    },

    /// Token index is not below the vocabulary size.
    #[error("token index {index} out of range for vocabulary of size {vocab_size}: {vocab:?}")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Vocabulary size
        vocab_size: usize,
        /// Full sorted vocabulary
        vocab: Vec<char>,
    },
}
