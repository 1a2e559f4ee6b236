//! Error types for output writing.

use thiserror::Error;

/// Errors that can occur while writing chunk output.
#[derive(Error, Debug)]
pub enum OutputError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Row serialization error.
    #[error("row serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// Synthesizer construction error.
    #[error("synthesizer error: {0}")]
    Synth(#[from] datagen_synth::SynthError),
}
