//! Error taxonomy for the crate.
//!
//! Validation failures ([`Error::InvalidSequence`],
//! [`Error::InvalidStructureId`]) and lookup misses ([`Error::NotFound`]) are
//! the errors callers are expected to act on. [`Error::ExternalService`] is
//! reported by structure sources and is normally degraded to "unavailable";
//! the remaining variants wrap IO and parsing failures.

/// Errors produced by `motifscan`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input is empty or contains a character outside `{A, C, G, T}`.
    #[error("Invalid DNA sequence: {0}")]
    InvalidSequence(String),

    /// Not a 4-character PDB identifier.
    #[error("Invalid structure ID: {0}")]
    InvalidStructureId(String),

    /// A keyed lookup (gene symbol, knowledge category) had no entry.
    #[error("{what} not found: {key}. Available: {available}")]
    NotFound {
        what: &'static str,
        key: String,
        available: String,
    },

    /// A structure source failed (transport, status, malformed payload).
    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("FASTA/FASTQ parse error: {0}")]
    Fastx(#[from] needletail::errors::ParseError),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
