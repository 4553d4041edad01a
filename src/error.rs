use thiserror::Error;

/// The crate-wide error type.
///
/// `InvariantViolation` and `OutOfBounds` name failure modes that the core
/// treats as fatal bugs rather than recoverable conditions: callers are not
/// expected to match on them and continue, only to see a self-documenting
/// message instead of a bare panic. `LoadError` is the one variant a caller
/// is expected to act on (by regenerating the table and retrying).
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load table at {path}: expected {expected} bytes, found {found}")]
    LoadError {
        path: String,
        expected: usize,
        found: usize,
    },

    #[error("I/O error loading table at {path}: {source}")]
    LoadIoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("out of bounds: index {index} >= size {size} ({context})")]
    OutOfBounds {
        index: usize,
        size: usize,
        context: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
