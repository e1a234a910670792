//! Error types shared by the generator, the codecs and the checker.

use thiserror::Error;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while generating, reading or checking instances.
#[derive(Debug, Error)]
pub enum Error {
    /// A generator parameter is outside its domain (`m >= 1`, `D >= 1`).
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// `n = 10·(m-1)` or the cell count `m·n` does not fit in `usize`.
    #[error("instance dimensions overflow: {num_rows} rows")]
    DimensionOverflow { num_rows: usize },

    /// The coefficient or rhs buffers could not be reserved.
    #[error("failed to allocate {cells} cells for a {num_rows}x{num_cols} instance")]
    Allocation {
        num_rows: usize,
        num_cols: usize,
        cells: usize,
    },

    /// A working buffer of `len` elements could not be reserved.
    #[error("failed to allocate a buffer of {len} elements for {what}")]
    BufferAllocation { what: &'static str, len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed instance text. `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// An instance violates the market split structure.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// Malformed or incompatible solution text.
    #[error("solution: {0}")]
    Solution(String),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse(7, "expected 3 fields");
        assert_eq!(err.to_string(), "line 7: expected 3 fields");
    }

    #[test]
    fn test_buffer_allocation_display() {
        let err = Error::BufferAllocation {
            what: "a permutation",
            len: 13,
        };
        assert_eq!(
            err.to_string(),
            "failed to allocate a buffer of 13 elements for a permutation"
        );
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
