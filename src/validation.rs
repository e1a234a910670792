//! Structural validation of market split instances.
//!
//! Checks generated or parsed instances against the market split rules
//! and reports every problem found rather than stopping at the first:
//! - Coefficients in `[0, D-1]`
//! - `b_i = floor(Σ_j a_ij / 2)` for every row
//! - Dimensions `m × 10·(m-1)`
//!
//! [`validate_sparse_text`] additionally checks the `.dat` layout itself:
//! one rhs sentinel per row, no explicit zeros, ascending order.

use std::collections::HashSet;

use crate::format::RHS_COLUMN;
use crate::models::{Instance, InstanceParams};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Matrix shape differs from `m × 10·(m-1)`.
    DimensionMismatch,
    /// A coefficient is `>= D`.
    CoefficientOutOfRange,
    /// A row's rhs is not half its sum (rounded down).
    RhsMismatch,
    /// A line is not three non-negative integers.
    MalformedLine,
    /// A line names a row outside `1..=m`.
    RowOutOfBounds,
    /// A line names a column outside `0..=n`.
    ColumnOutOfBounds,
    /// A zero coefficient was written explicitly.
    ExplicitZero,
    /// A row has no `row 0 rhs` line.
    MissingRhs,
    /// A row has more than one `row 0 rhs` line, or a cell appears twice.
    DuplicateEntry,
    /// Lines are not in ascending row/column order with the sentinel last.
    OutOfOrder,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an in-memory instance against `params`.
///
/// Checks:
/// 1. `num_rows = m` and `num_cols = 10·(m-1)`
/// 2. Every coefficient is `< D`
/// 3. Every rhs equals `floor(row_sum / 2)`
pub fn validate_instance(instance: &Instance, params: &InstanceParams) -> ValidationResult {
    let mut errors = Vec::new();

    let expected_cols = params.num_cols();
    if instance.num_rows() != params.num_rows || Some(instance.num_cols()) != expected_cols {
        errors.push(ValidationError::new(
            ValidationErrorKind::DimensionMismatch,
            format!(
                "Instance is {}x{}, expected {}x{}",
                instance.num_rows(),
                instance.num_cols(),
                params.num_rows,
                expected_cols.map_or_else(|| "?".to_string(), |n| n.to_string()),
            ),
        ));
    }

    for (i, row) in instance.rows().enumerate() {
        for (j, &a) in row.iter().enumerate() {
            if a >= params.range {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CoefficientOutOfRange,
                    format!(
                        "Coefficient ({}, {}) = {a} is not below D = {}",
                        i + 1,
                        j + 1,
                        params.range
                    ),
                ));
            }
        }
    }

    errors.extend(check_rhs(instance));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks `b_i = floor(Σ_j a_ij / 2)` for every row.
pub fn check_rhs(instance: &Instance) -> Vec<ValidationError> {
    (0..instance.num_rows())
        .filter(|&i| instance.rhs(i) != instance.derived_rhs(i))
        .map(|i| {
            ValidationError::new(
                ValidationErrorKind::RhsMismatch,
                format!(
                    "Row {} rhs is {}, expected {}",
                    i + 1,
                    instance.rhs(i),
                    instance.derived_rhs(i)
                ),
            )
        })
        .collect()
}

/// Validates `.dat` text as written for `params`.
///
/// Checks, per line:
/// 1. Three non-negative integer fields
/// 2. Row in `1..=m`, column in `0..=n`
/// 3. Coefficient lines are nonzero and `< D`
/// 4. Ascending row order; ascending columns within a row, rhs last
/// 5. No repeated cell or sentinel
///
/// Then per row: exactly one rhs sentinel, equal to half the row sum.
pub fn validate_sparse_text(text: &str, params: &InstanceParams) -> ValidationResult {
    let mut errors = Vec::new();
    let num_rows = params.num_rows;
    let num_cols = params.num_cols().unwrap_or(usize::MAX);

    let mut row_sums = vec![0u64; num_rows];
    let mut rhs: Vec<Option<u64>> = vec![None; num_rows];
    let mut seen = HashSet::new();
    // Last (row, col) emitted; the sentinel sorts after every real column.
    let mut last: Option<(usize, usize)> = None;

    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        let fields: Vec<u64> = match line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<u64>, _>>()
        {
            Ok(f) if f.len() == 3 => f,
            _ => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedLine,
                    format!("Line {lineno}: expected `row col value`, found `{line}`"),
                ));
                continue;
            }
        };
        let (row, col, value) = (fields[0] as usize, fields[1] as usize, fields[2]);

        if row == 0 || row > num_rows {
            errors.push(ValidationError::new(
                ValidationErrorKind::RowOutOfBounds,
                format!("Line {lineno}: row {row} outside 1..={num_rows}"),
            ));
            continue;
        }
        if col > num_cols {
            errors.push(ValidationError::new(
                ValidationErrorKind::ColumnOutOfBounds,
                format!("Line {lineno}: column {col} outside 0..={num_cols}"),
            ));
            continue;
        }

        if !seen.insert((row, col)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEntry,
                format!("Line {lineno}: ({row}, {col}) appears more than once"),
            ));
            continue;
        }

        let order_key = (row, if col == RHS_COLUMN { usize::MAX } else { col });
        if let Some(prev) = last {
            if order_key <= prev {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OutOfOrder,
                    format!("Line {lineno}: ({row}, {col}) out of order"),
                ));
            }
        }
        last = Some(order_key);

        if col == RHS_COLUMN {
            rhs[row - 1] = Some(value);
            continue;
        }
        if value == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExplicitZero,
                format!("Line {lineno}: zero coefficient at ({row}, {col})"),
            ));
        }
        if value >= u64::from(params.range) {
            errors.push(ValidationError::new(
                ValidationErrorKind::CoefficientOutOfRange,
                format!(
                    "Line {lineno}: coefficient {value} is not below D = {}",
                    params.range
                ),
            ));
        }
        row_sums[row - 1] = row_sums[row - 1].saturating_add(value);
    }

    for (i, (b, sum)) in rhs.iter().zip(&row_sums).enumerate() {
        match b {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingRhs,
                format!("Row {} has no rhs line", i + 1),
            )),
            Some(b) if *b != sum / 2 => errors.push(ValidationError::new(
                ValidationErrorKind::RhsMismatch,
                format!("Row {} rhs is {b}, expected {}", i + 1, sum / 2),
            )),
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
