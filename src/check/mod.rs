//! Solution checking for market split instances.
//!
//! Verifies that a binary vector `x` satisfies `A x = b` row by row.
//! Before checking, every rhs must equal half its row sum (rounded down);
//! an instance that breaks this rule is rejected outright.
//!
//! # Submodules
//!
//! - [`solution`]: Parsing of 0-1 vectors, index lists and `x#i v` lines

pub mod solution;

pub use solution::{is_inline_solution, parse_solution, SolutionFormat};

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Instance;
use crate::validation::check_rhs;

/// Outcome for one equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCheck {
    /// 1-based row index.
    pub row: usize,
    /// `Σ_j a_ij x_j`.
    pub lhs: u64,
    /// `b_i`.
    pub rhs: u64,
}

impl RowCheck {
    /// Whether the equation holds.
    pub fn holds(&self) -> bool {
        self.lhs == self.rhs
    }
}

/// Per-row verification report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// One entry per row, in row order.
    pub rows: Vec<RowCheck>,
}

impl Verification {
    /// Whether every equation holds.
    pub fn is_feasible(&self) -> bool {
        self.rows.iter().all(RowCheck::holds)
    }

    /// Equations that do not hold.
    pub fn failed(&self) -> impl Iterator<Item = &RowCheck> + '_ {
        self.rows.iter().filter(|r| !r.holds())
    }
}

/// Checks `solution` against `instance`.
///
/// # Errors
/// - [`Error::Solution`] if `solution.len() != n`
/// - [`Error::InvalidInstance`] if some rhs is not `floor(row_sum / 2)`
pub fn verify(instance: &Instance, solution: &[bool]) -> Result<Verification> {
    if solution.len() != instance.num_cols() {
        return Err(Error::Solution(format!(
            "expected {} values, found {}",
            instance.num_cols(),
            solution.len()
        )));
    }

    let rhs_errors = check_rhs(instance);
    if !rhs_errors.is_empty() {
        let messages: Vec<String> = rhs_errors.into_iter().map(|e| e.message).collect();
        return Err(Error::InvalidInstance(messages.join("; ")));
    }

    let rows = instance
        .rows()
        .enumerate()
        .map(|(i, row)| {
            let lhs: u64 = row
                .iter()
                .zip(solution)
                .filter(|&(_, &x)| x)
                .map(|(&a, _)| u64::from(a))
                .sum();
            let check = RowCheck {
                row: i + 1,
                lhs,
                rhs: instance.rhs(i),
            };
            debug!(row = check.row, lhs, rhs = check.rhs, "row checked");
            check
        })
        .collect();

    Ok(Verification { rows })
}
