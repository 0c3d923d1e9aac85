//! Error types for structure operations and history navigation
//!
//! Every error here is local and recoverable: the caller (usually the TUI)
//! turns it into a status message and carries on.
//!
//! - [`StructureError`]: a request the structure cannot satisfy (empty
//!   pop/dequeue/peek, out-of-range list position, missing key, a stack
//!   too long to reverse recursively)
//! - [`HistoryError`]: undo/redo with nothing to act on
//! - [`Error`]: the union of both, plus the binary's start-up failures
//!   (I/O and a bad log filter)

use thiserror::Error;

/// Errors raised by the structure core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// pop/dequeue/peek/front on an empty structure
    #[error("{structure} is empty, cannot {operation}")]
    Empty {
        structure: &'static str,
        operation: &'static str,
    },

    /// List position outside `0..len` (or `0..=len` for inserts)
    #[error("position {index} is out of bounds for a list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Structure too long for a recursive operation
    #[error("{structure} holds {len} values, {operation} is limited to {limit}")]
    TooLarge {
        structure: &'static str,
        operation: &'static str,
        len: usize,
        limit: usize,
    },

    /// Search miss on an operation that needs the value to exist
    #[error("value {value} not found in {structure}")]
    NotFound {
        value: String,
        structure: &'static str,
    },
}

impl StructureError {
    pub fn empty(structure: &'static str, operation: &'static str) -> Self {
        StructureError::Empty {
            structure,
            operation,
        }
    }

    pub fn not_found(value: impl ToString, structure: &'static str) -> Self {
        StructureError::NotFound {
            value: value.to_string(),
            structure,
        }
    }
}

/// Undo/redo on an empty history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

/// Top-level error for the library and binary
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}

impl Error {
    /// True for the no-op undo/redo case
    pub fn is_no_op(&self) -> bool {
        matches!(self, Error::History(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_up_errors_are_not_no_ops() {
        let io: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(io, Error::Io(_)));
        assert!(!io.is_no_op());

        let parse = tracing_subscriber::EnvFilter::try_new("structty=loud").unwrap_err();
        let filter: Error = parse.into();
        assert!(matches!(filter, Error::LogFilter(_)));
        assert!(filter.to_string().starts_with("invalid log filter"));
    }

    #[test]
    fn test_too_large_message() {
        let err = StructureError::TooLarge {
            structure: "stack",
            operation: "recursive reverse",
            len: 1001,
            limit: 1000,
        };
        assert_eq!(
            err.to_string(),
            "stack holds 1001 values, recursive reverse is limited to 1000"
        );
    }
}
