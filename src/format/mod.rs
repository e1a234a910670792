//! Text formats for market split instances.
//!
//! # Formats
//!
//! | Format | Module | Produced by | Layout |
//! |--------|--------|-------------|--------|
//! | Sparse `.dat` | [`sparse`] | `markshare-gen` | `row col value` triples, `row 0 rhs` sentinel |
//! | Dense CSV | [`dense`] | `markshare-convert` | `m n` header, one row per line, rhs last |
//!
//! [`detect_format`] tells the two apart from the first data line.

pub mod dense;
pub mod sparse;

pub use dense::{csv_path_for, parse_dense, write_dense, write_dense_file};
pub use sparse::{parse_sparse, to_sparse_string, write_sparse, write_sparse_file, RHS_COLUMN};

use crate::error::{Error, Result};
use crate::models::Instance;

/// Instance text layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceFormat {
    /// `row col value` triples.
    Sparse,
    /// `m n` header followed by dense rows.
    Dense,
}

/// Guesses the layout from the first non-blank, non-comment line.
///
/// A two-field first line is a dense header; anything else is sparse.
pub fn detect_format(text: &str) -> InstanceFormat {
    let first = text
        .lines()
        .map(|line| line.replace(',', " "))
        .find(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        });
    match first {
        Some(line) if line.split_whitespace().count() == 2 => InstanceFormat::Dense,
        _ => InstanceFormat::Sparse,
    }
}

/// Parses either layout. `num_cols` applies to sparse input only.
pub fn parse_instance(text: &str, num_cols: Option<usize>) -> Result<Instance> {
    match detect_format(text) {
        InstanceFormat::Sparse => parse_sparse(text, num_cols),
        InstanceFormat::Dense => parse_dense(text),
    }
}

pub(crate) fn parse_field<T: std::str::FromStr>(
    field: &str,
    lineno: usize,
    what: &str,
) -> Result<T> {
    field
        .parse()
        .map_err(|_| Error::parse(lineno, format!("invalid {what} `{field}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format("1 1 5\n1 0 2\n"), InstanceFormat::Sparse);
        assert_eq!(detect_format("2 3\n1,2,3,3\n"), InstanceFormat::Dense);
        assert_eq!(detect_format("# c\n\n2 3\n"), InstanceFormat::Dense);
        assert_eq!(detect_format(""), InstanceFormat::Sparse);
    }

    #[test]
    fn test_parse_instance_both_layouts() {
        let sparse = parse_instance("1 1 4\n1 3 2\n1 0 3\n", Some(3)).unwrap();
        let dense = parse_instance("1 3\n4, 0, 2, 3\n", None).unwrap();
        assert_eq!(sparse, dense);
    }
}
