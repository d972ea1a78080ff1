//! Error types for seqbench-core

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while reading sequence input
#[derive(Debug, Error)]
pub enum CoreError {
    /// I/O error while reading the input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed FASTA content
    #[error("Invalid FASTA format at line {line}: {msg}")]
    InvalidFasta {
        /// 1-based line number where the problem was found
        line: usize,
        /// What was wrong
        msg: String,
    },
}
