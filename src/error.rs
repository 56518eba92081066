//! Error types for wordlist generation

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Operator declined the large-output confirmation
    #[error("Aborted.")]
    Aborted,

    /// Keyspace does not fit in 128 bits
    #[error("Pattern keyspace is too large to enumerate ({segments} segments); --yes does not bypass this limit")]
    KeyspaceOverflow { segments: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
