//! Error types for compression and decompression.

use thiserror::Error;

/// Error variants for compressor operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input has too many bits for offsets to stay encodable.
    #[error("input too large: {0} bits exceeds the encodable maximum")]
    InputTooLarge(u64),

    /// A variable-width integer started with an impossible width tag.
    #[error("invalid width prefix in variable-width integer")]
    InvalidWidthPrefix,

    /// The container header is missing or inconsistent.
    #[error("corrupt header: {0}")]
    CorruptHeader(String),

    /// A round's payload contradicts its own header.
    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    /// An I/O error occurred while reading a bitstream.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for compressor operations.
pub type Result<T> = std::result::Result<T, Error>;
