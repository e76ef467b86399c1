use std::fs::File;
use std::io::Read;
use std::path::Path;

use charlm_core::{Error, Result};

/// Read the whole file at `path` as UTF-8 text.
///
/// Invalid UTF-8 surfaces as an [`Error::Io`] with kind `InvalidData`.
pub fn read_corpus(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| Error::io(path, e))?;
    Ok(text)
}
