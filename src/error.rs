//! Crate-wide error type.
//!
//! Every fallible operation returns its cause as a value; there is no shared
//! "last error" state. I/O failures keep the underlying `std::io::Error` so
//! callers can still reach the platform error code through `source()`.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Pixel storage (or a transient working buffer) could not be allocated.
    OutOfMemory,
    /// A file operation failed; `context` names the path and stage.
    Io {
        context: String,
        source: std::io::Error,
    },
    /// Persisted data did not match the PGM grammar.
    Format(String),
}

impl Error {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfMemory => write!(f, "Failed to allocate pixel storage"),
            Error::Io { context, source } => write!(f, "{context}: {source}"),
            Error::Format(msg) => write!(f, "Malformed PGM data: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
