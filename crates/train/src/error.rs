use std::path::PathBuf;

/// Result alias for run preparation.
pub type Result<T> = std::result::Result<T, TrainError>;

/// Errors raised while preparing a run.
#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    /// Corpus, tokenizer or sampling failure.
    #[error(transparent)]
    Data(#[from] charlm_core::Error),

    /// The output directory could not be created.
    #[error("cannot create output directory {}: {source}", path.display())]
    OutputDir {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The resolved config could not be written.
    #[error("cannot write run config to {}: {source}", path.display())]
    WriteConfig {
        /// Target file
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The resolved config could not be serialized.
    #[error("cannot serialize run config: {0}")]
    Json(#[from] serde_json::Error),
}
