//! Error types for evocore

use crate::types::Integer;
use thiserror::Error;

/// Evocore error type
///
/// These variants cover the boundaries where the crate consumes untrusted
/// external input: raw integers from a deserialized or mutated genome.
/// Violations of internal invariants panic instead; see [`crate::check`].
#[derive(Debug, Error)]
pub enum EvocoreError {
    /// Raw integer outside the valid operation-code range
    #[error("invalid op code: {0}")]
    InvalidOpCode(Integer),

    /// Raw integer is not a valid address for the named register bank
    #[error("invalid {bank} address {value}: capacity is {capacity}")]
    InvalidAddress {
        bank: &'static str,
        value: Integer,
        capacity: usize,
    },

    /// Integer does not fit the destination type without overflow
    #[error("cast overflow: {value} does not fit in {target}")]
    CastOverflow {
        value: String,
        target: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, EvocoreError>;
