//! Dense CSV format.
//!
//! First line `m n`, then one line per row with the `n` coefficients
//! followed by the rhs. Writers right-align every value to width 4,
//! separate with commas and end lines with `\r\n` as spreadsheet CSV
//! does. Readers accept either line ending, treat commas as whitespace
//! and skip blank lines and `#` comments.
//!
//! ```text
//! 2 3
//!   42,   0,   7,  24
//!    0,  13,   0,   6
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::parse_field;
use crate::error::{Error, Result};
use crate::models::Instance;

/// Record terminator of written CSV.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Writes `instance` as dense CSV.
pub fn write_dense<W: Write>(instance: &Instance, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    write!(
        writer,
        "{} {}{LINE_TERMINATOR}",
        instance.num_rows(),
        instance.num_cols()
    )?;
    for i in 0..instance.num_rows() {
        let fields: Vec<String> = instance
            .row(i)
            .iter()
            .map(|a| format!("{a:4}"))
            .chain(std::iter::once(format!("{:4}", instance.rhs(i))))
            .collect();
        write!(writer, "{}{LINE_TERMINATOR}", fields.join(","))?;
    }
    writer.flush()?;
    Ok(())
}

/// CSV path for a `.dat` input: same stem, `.csv` extension.
///
/// Fails unless `dat_path` has the `.dat` extension.
pub fn csv_path_for(dat_path: &Path) -> Result<PathBuf> {
    match dat_path.extension().and_then(|e| e.to_str()) {
        Some("dat") => Ok(dat_path.with_extension("csv")),
        _ => Err(Error::invalid(
            "input",
            format!("`{}` must have a .dat extension", dat_path.display()),
        )),
    }
}

/// Writes `instance` as dense CSV to `path`.
pub fn write_dense_file(instance: &Instance, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_dense(instance, file)?;
    info!(path = %path.display(), "dense instance written");
    Ok(())
}

/// Parses dense text (header `m n`, then `m` rows of `n + 1` values).
pub fn parse_dense(text: &str) -> Result<Instance> {
    let normalized = text.replace(',', " ");
    let mut lines = normalized
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, fields)| !fields.is_empty() && !fields[0].starts_with('#'));

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| Error::parse(1, "missing `m n` header"))?;
    if header.len() != 2 {
        return Err(Error::parse(header_line, "header must be `m n`"));
    }
    let num_rows: usize = parse_field(header[0], header_line, "number of rows")?;
    let num_cols: usize = parse_field(header[1], header_line, "number of columns")?;

    let mut instance = Instance::zeroed(num_rows, num_cols)?;
    let mut filled = 0;

    for (lineno, fields) in lines {
        if filled == num_rows {
            return Err(Error::parse(
                lineno,
                format!("more than {num_rows} rows"),
            ));
        }
        if fields.len() != num_cols + 1 {
            return Err(Error::parse(
                lineno,
                format!("expected {} values, found {}", num_cols + 1, fields.len()),
            ));
        }
        for (entry, field) in instance.row_mut(filled).iter_mut().zip(&fields) {
            *entry = parse_field(field, lineno, "coefficient")?;
        }
        let rhs = parse_field(fields[num_cols], lineno, "rhs")?;
        instance.set_rhs(filled, rhs);
        filled += 1;
    }

    if filled != num_rows {
        return Err(Error::parse(
            header_line,
            format!("declared {num_rows} rows, found {filled}"),
        ));
    }
    Ok(instance)
}
