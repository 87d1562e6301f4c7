//! Error types for the I/O and decode boundary
//!
//! The conversion engine itself is total and never fails; errors only
//! arise while obtaining input bytes or when decoding converted output.

use std::io;
use std::path::PathBuf;

/// Errors produced while obtaining the input document.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Stdin was interactive and no file path was given.
    #[error("no piped data and no file provided")]
    NoInput,

    #[error("failed to read {}: {source}", path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("failed to read standard input: {source}")]
    Stdin { source: io::Error },
}

/// Error returned when converted output fails to decode as JSON.
///
/// The engine favors permissiveness over rejection, so this decode failure
/// is the authoritative error signal for callers that need strict
/// validation.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct DecodeError(#[from] serde_json::Error);

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
