use std::fs;
use std::path::Path;

use charlm_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::CharTokenizer;

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct VocabFile {
    version: u32,
    chars: Vec<char>,
}

impl CharTokenizer {
    /// Write the vocabulary to `path` (bincode).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = VocabFile {
            version: FORMAT_VERSION,
            chars: self.vocab().to_vec(),
        };
        let bytes = bincode::serialize(&file).map_err(|e| Error::Persist {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        fs::write(path, bytes).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), vocab_size = self.vocab_size(), "saved vocabulary");
        Ok(())
    }

    /// Read a vocabulary written by [`CharTokenizer::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        let file: VocabFile = bincode::deserialize(&bytes).map_err(|e| Error::Persist {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if file.version != FORMAT_VERSION {
            return Err(Error::Persist {
                path: path.to_path_buf(),
                reason: format!(
                    "unsupported format version {} (expected {FORMAT_VERSION})",
                    file.version
                ),
            });
        }
        Self::from_vocab(file.chars)
    }
}
