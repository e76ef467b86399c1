use std::collections::HashMap;

use charlm_core::{ConfigError, EncodingError, Error, Result};

/// Bijective character <-> index mapping built once from a corpus.
///
/// `itos` is sorted by code point and has no duplicates; `stoi` is its exact
/// inverse. Neither changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharTokenizer {
    itos: Vec<char>,
    stoi: HashMap<char, usize>,
}

impl CharTokenizer {
    /// Build the vocabulary from every distinct character of `corpus`.
    ///
    /// Fails with [`ConfigError::EmptyCorpus`] when `corpus` is empty.
    pub fn new(corpus: &str) -> Result<Self> {
        if corpus.is_empty() {
            return Err(ConfigError::EmptyCorpus.into());
        }
        let mut chars: Vec<char> = corpus.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        Ok(Self::from_sorted(chars))
    }

    /// Rebuild a tokenizer from a stored vocabulary.
    ///
    /// The vocabulary must be non-empty and strictly increasing, which is what
    /// [`CharTokenizer::vocab`] always returns.
    pub fn from_vocab(chars: Vec<char>) -> Result<Self> {
        if chars.is_empty() {
            return Err(ConfigError::InvalidVocab {
                reason: "vocabulary is empty".to_string(),
            }
            .into());
        }
        if let Some(pair) = chars.windows(2).find(|w| w.first() >= w.get(1)) {
            return Err(ConfigError::InvalidVocab {
                reason: format!("vocabulary is not strictly sorted at {pair:?}"),
            }
            .into());
        }
        Ok(Self::from_sorted(chars))
    }

    fn from_sorted(itos: Vec<char>) -> Self {
        let stoi = itos.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { itos, stoi }
    }

    /// Number of distinct characters.
    pub fn vocab_size(&self) -> usize {
        self.itos.len()
    }

    /// Sorted vocabulary; position is the token index.
    pub fn vocab(&self) -> &[char] {
        &self.itos
    }

    /// Index of `ch`, if it is in the vocabulary.
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.stoi.get(&ch).copied()
    }

    /// Character for `index`, if it is below `vocab_size`.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.itos.get(index).copied()
    }

    /// Map each character of `text` to its index.
    ///
    /// Output length equals `text.chars().count()`. The first character not
    /// in the vocabulary fails the whole call.
    pub fn encode(&self, text: &str) -> Result<Vec<usize>> {
        text.chars()
            .map(|ch| {
                self.index_of(ch).ok_or_else(|| {
                    Error::from(EncodingError::UnknownChar {
                        ch,
                        vocab: self.itos.clone(),
                    })
                })
            })
            .collect()
    }

    /// Map each index back to its character.
    pub fn decode(&self, indices: &[usize]) -> Result<String> {
        indices
            .iter()
            .map(|&index| {
                self.char_at(index).ok_or_else(|| {
                    Error::from(EncodingError::IndexOutOfRange {
                        index,
                        vocab_size: self.vocab_size(),
                        vocab: self.itos.clone(),
                    })
                })
            })
            .collect()
    }
}
