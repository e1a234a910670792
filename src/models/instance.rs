//! Market split instance: coefficient matrix and right-hand side.
//!
//! Represents the feasibility problem `A x = b, x ∈ {0,1}^n`. The matrix
//! is stored densely in row-major order; serialization decides what to
//! omit.
//!
//! # Reference
//! Cornuéjols & Dawande (1998), "A Class of Hard Small 0-1 Programs", IPCO VI

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A dense `m × n` coefficient matrix with one rhs value per row.
///
/// Entries are written once while the instance is built and are read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    num_rows: usize,
    num_cols: usize,
    /// Row-major coefficients, `num_rows * num_cols` entries.
    coefficients: Vec<u32>,
    rhs: Vec<u64>,
}

impl Instance {
    /// Allocates an all-zero instance.
    ///
    /// Buffers are reserved up front; failure to reserve is reported as
    /// [`Error::Allocation`] instead of aborting.
    pub(crate) fn zeroed(num_rows: usize, num_cols: usize) -> Result<Self> {
        let cells = num_rows
            .checked_mul(num_cols)
            .ok_or(Error::DimensionOverflow { num_rows })?;
        let alloc_err = || Error::Allocation {
            num_rows,
            num_cols,
            cells,
        };

        let mut coefficients = Vec::new();
        coefficients.try_reserve_exact(cells).map_err(|_| alloc_err())?;
        coefficients.resize(cells, 0);

        let mut rhs = Vec::new();
        rhs.try_reserve_exact(num_rows).map_err(|_| alloc_err())?;
        rhs.resize(num_rows, 0);

        Ok(Self {
            num_rows,
            num_cols,
            coefficients,
            rhs,
        })
    }

    /// Builds an instance from dense rows and rhs values.
    ///
    /// Every row must have the same length; `rhs` must have one entry per row.
    pub fn from_rows(rows: Vec<Vec<u32>>, rhs: Vec<u64>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if rhs.len() != num_rows {
            return Err(Error::invalid(
                "rhs",
                format!("expected {num_rows} values, got {}", rhs.len()),
            ));
        }
        if let Some(i) = rows.iter().position(|r| r.len() != num_cols) {
            return Err(Error::invalid(
                "rows",
                format!(
                    "row {} has {} entries, expected {num_cols}",
                    i + 1,
                    rows[i].len()
                ),
            ));
        }

        Ok(Self {
            num_rows,
            num_cols,
            coefficients: rows.into_iter().flatten().collect(),
            rhs,
        })
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [u32] {
        let start = i * self.num_cols;
        &mut self.coefficients[start..start + self.num_cols]
    }

    pub(crate) fn set_rhs(&mut self, i: usize, value: u64) {
        self.rhs[i] = value;
    }

    /// Number of equations `m`.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of binary variables `n`.
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Coefficients of row `i` (0-based).
    ///
    /// # Panics
    /// If `i >= num_rows`.
    pub fn row(&self, i: usize) -> &[u32] {
        let start = i * self.num_cols;
        &self.coefficients[start..start + self.num_cols]
    }

    /// Iterates rows in order. Works for `n = 0` (yields empty slices).
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.num_rows).map(move |i| self.row(i))
    }

    /// Coefficient `a_ij` (0-based).
    pub fn coefficient(&self, i: usize, j: usize) -> u32 {
        self.row(i)[j]
    }

    /// Right-hand side `b_i` (0-based).
    pub fn rhs(&self, i: usize) -> u64 {
        self.rhs[i]
    }

    /// All right-hand sides.
    pub fn rhs_values(&self) -> &[u64] {
        &self.rhs
    }

    /// Sum of row `i`.
    pub fn row_sum(&self, i: usize) -> u64 {
        self.row(i).iter().map(|&a| u64::from(a)).sum()
    }

    /// `floor(row_sum / 2)`, the market split rhs for row `i`.
    pub fn derived_rhs(&self, i: usize) -> u64 {
        self.row_sum(i) / 2
    }

    /// Nonzero entries of row `i` as `(column, value)`, ascending column.
    pub fn nonzeros(&self, i: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.row(i)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, a)| a != 0)
    }

    /// Number of nonzero coefficients in the whole matrix.
    pub fn nonzero_count(&self) -> usize {
        self.coefficients.iter().filter(|&&a| a != 0).count()
    }

    /// Largest coefficient, or `None` for an empty matrix.
    pub fn max_coefficient(&self) -> Option<u32> {
        self.coefficients.iter().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Instance {
        Instance::from_rows(vec![vec![3, 0, 5], vec![0, 0, 1]], vec![4, 0]).unwrap()
    }

    #[test]
    fn test_dimensions_and_access() {
        let inst = sample();
        assert_eq!(inst.num_rows(), 2);
        assert_eq!(inst.num_cols(), 3);
        assert_eq!(inst.row(0), &[3, 0, 5]);
        assert_eq!(inst.coefficient(1, 2), 1);
        assert_eq!(inst.rhs(0), 4);
        assert_eq!(inst.rhs_values(), &[4, 0]);
    }

    #[test]
    fn test_row_sums() {
        let inst = sample();
        assert_eq!(inst.row_sum(0), 8);
        assert_eq!(inst.derived_rhs(0), 4);
        assert_eq!(inst.row_sum(1), 1);
        assert_eq!(inst.derived_rhs(1), 0); // floor(1/2)
    }

    #[test]
    fn test_nonzeros_ascending() {
        let inst = sample();
        let nz: Vec<_> = inst.nonzeros(0).collect();
        assert_eq!(nz, vec![(0, 3), (2, 5)]);
        assert_eq!(inst.nonzero_count(), 3);
        assert_eq!(inst.max_coefficient(), Some(5));
    }

    #[test]
    fn test_zero_columns() {
        let inst = Instance::zeroed(3, 0).unwrap();
        assert_eq!(inst.num_rows(), 3);
        assert_eq!(inst.rows().count(), 3);
        assert!(inst.rows().all(|r| r.is_empty()));
        assert_eq!(inst.row_sum(2), 0);
        assert_eq!(inst.max_coefficient(), None);
    }

    #[test]
    fn test_zeroed_overflow() {
        let err = Instance::zeroed(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, Error::DimensionOverflow { .. }));
    }

    #[test]
    fn test_zeroed_allocation_failure() {
        let err = Instance::zeroed(usize::MAX / 8, 2).unwrap_err();
        assert!(matches!(err, Error::Allocation { .. }));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Instance::from_rows(vec![vec![1, 2], vec![1]], vec![1, 0]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "rows", .. }));
    }

    #[test]
    fn test_from_rows_rhs_len() {
        let err = Instance::from_rows(vec![vec![1, 2]], vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "rhs", .. }));
    }

    #[test]
    fn test_serde_roundtrip() {
        let inst = sample();
        let json = serde_json::to_string(&inst).unwrap();
        let back: Instance = serde_json::from_str(&json).unwrap();
        assert_eq!(inst, back);
    }
}
