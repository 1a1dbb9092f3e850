//! Error types for IDX decoding.

use std::io;
use thiserror::Error;

/// Everything that can go wrong while loading an IDX file.
///
/// A failed load returns one of these instead of a collection; any
/// open file handle and partially filled buffer are released before
/// the error reaches the caller.
#[derive(Error, Debug)]
pub enum IdxError {
    #[error("empty file path")]
    InvalidPath,

    #[error("failed to open file: {0}")]
    OpenFailed(#[source] io::Error),

    #[error("file ends before the header is complete")]
    TruncatedHeader,

    #[error("magic number mismatch: expected {expected:#010x}, found {found:#010x}")]
    MagicMismatch { expected: u32, found: u32 },

    #[error("payload truncated: header promised {expected} bytes, file held {read}")]
    TruncatedPayload { expected: usize, read: usize },

    #[error("could not allocate a {0} byte payload buffer")]
    AllocationFailure(usize),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
