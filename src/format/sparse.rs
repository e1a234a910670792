//! Sparse triple format (`.dat`).
//!
//! One line per nonzero coefficient, `row col value`, 1-based. Each row
//! ends with a sentinel line `row 0 rhs` carrying its right-hand side.
//! Rows appear in ascending order, columns ascending within a row. Zero
//! coefficients are never written; readers default missing cells to 0.
//!
//! ```text
//! 1 1 42
//! 1 3 7
//! 1 0 24
//! 2 2 13
//! 2 0 6
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use super::parse_field;
use crate::error::{Error, Result};
use crate::models::Instance;

/// Column index reserved for the rhs sentinel line.
pub const RHS_COLUMN: usize = 0;

/// Writes `instance` in sparse triple format.
pub fn write_sparse<W: Write>(instance: &Instance, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for i in 0..instance.num_rows() {
        let row = i + 1;
        for (j, value) in instance.nonzeros(i) {
            writeln!(writer, "{} {} {}", row, j + 1, value)?;
        }
        writeln!(writer, "{} {} {}", row, RHS_COLUMN, instance.rhs(i))?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes `instance` to it.
///
/// A file that fails midway is left as is.
pub fn write_sparse_file(instance: &Instance, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_sparse(instance, file)?;
    info!(
        path = %path.display(),
        nonzeros = instance.nonzero_count(),
        "sparse instance written"
    );
    Ok(())
}

/// Renders `instance` in sparse triple format.
pub fn to_sparse_string(instance: &Instance) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_sparse(instance, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Parses sparse triple text into a dense instance.
///
/// The row count is the largest row index seen. The column count is
/// `num_cols` when given, else the largest column index seen; a column
/// beyond a given `num_cols` is an error. Blank lines are skipped.
///
/// # Errors
/// - [`Error::Parse`] on a malformed line or a cell given twice
/// - [`Error::InvalidInstance`] if some row up to the largest index has
///   no `row 0 rhs` line
pub fn parse_sparse(text: &str, num_cols: Option<usize>) -> Result<Instance> {
    let mut entries: Vec<(usize, usize, u64)> = Vec::new();
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut max_row = 0;
    let mut max_col = 0;

    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            return Err(Error::parse(
                lineno,
                format!("expected `row col value`, found {} fields", fields.len()),
            ));
        }

        let row: usize = parse_field(fields[0], lineno, "row index")?;
        let col: usize = parse_field(fields[1], lineno, "column index")?;
        let value: u64 = parse_field(fields[2], lineno, "value")?;

        if row == 0 {
            return Err(Error::parse(lineno, "row indices start at 1"));
        }
        if let Some(n) = num_cols {
            if col > n {
                return Err(Error::parse(
                    lineno,
                    format!("column {col} exceeds {n} variables"),
                ));
            }
        }
        if col != RHS_COLUMN && value > u64::from(u32::MAX) {
            return Err(Error::parse(
                lineno,
                format!("coefficient {value} out of range"),
            ));
        }

        if !seen.insert((row, col)) {
            let what = if col == RHS_COLUMN {
                format!("rhs of row {row}")
            } else {
                format!("cell ({row}, {col})")
            };
            return Err(Error::parse(lineno, format!("{what} appears more than once")));
        }

        max_row = max_row.max(row);
        max_col = max_col.max(col);
        entries.push((row, col, value));
    }

    if let Some(row) = (1..=max_row).find(|&r| !seen.contains(&(r, RHS_COLUMN))) {
        return Err(Error::InvalidInstance(format!("row {row} has no rhs line")));
    }

    let num_rows = max_row;
    let num_cols = num_cols.unwrap_or(max_col);
    debug!(num_rows, num_cols, lines = entries.len(), "parsed sparse triples");

    let mut instance = Instance::zeroed(num_rows, num_cols)?;
    for (row, col, value) in entries {
        if col == RHS_COLUMN {
            instance.set_rhs(row - 1, value);
        } else {
            // Bounded by the u32 check above.
            instance.row_mut(row - 1)[col - 1] = value as u32;
        }
    }
    Ok(instance)
}
