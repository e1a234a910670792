//! Generator parameters.
//!
//! A market split instance is fully determined by three integers: the
//! number of equations `m`, the exclusive coefficient bound `D`, and the
//! random seed. The number of variables is derived, never set.
//!
//! # Reference
//! Cornuéjols & Dawande (1998), "A Class of Hard Small 0-1 Programs", IPCO VI

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Variables per equation beyond the first: `n = VARS_PER_ROW · (m - 1)`.
pub const VARS_PER_ROW: usize = 10;

/// Parameters `(m, D, seed)` of one market split instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceParams {
    /// Number of equations `m`.
    pub num_rows: usize,
    /// Exclusive coefficient bound `D`; coefficients lie in `[0, D-1]`.
    pub range: u32,
    /// Seed for the uniform generator.
    pub seed: i64,
}

impl InstanceParams {
    /// Creates parameters without checking them. See [`validate`](Self::validate).
    pub fn new(num_rows: usize, range: u32, seed: i64) -> Self {
        Self {
            num_rows,
            range,
            seed,
        }
    }

    /// Rejects `m = 0` and `D = 0`.
    ///
    /// `m = 1` (no variables) and `D = 1` (all-zero matrix) are degenerate
    /// but accepted.
    pub fn validate(&self) -> Result<()> {
        if self.num_rows == 0 {
            return Err(Error::invalid("m", "number of equations must be at least 1"));
        }
        if self.range == 0 {
            return Err(Error::invalid("D", "coefficient range must be at least 1"));
        }
        Ok(())
    }

    /// Number of binary variables `n = 10·(m-1)`, or `None` on overflow.
    pub fn num_cols(&self) -> Option<usize> {
        self.num_rows.saturating_sub(1).checked_mul(VARS_PER_ROW)
    }

    /// Total number of matrix cells `m·n`, or `None` on overflow.
    pub fn num_cells(&self) -> Option<usize> {
        self.num_cols()?.checked_mul(self.num_rows)
    }

    /// Output file name `markshare_<m>_<D>_<seed>.dat`.
    pub fn file_name(&self) -> String {
        format!(
            "markshare_{}_{}_{}.dat",
            self.num_rows, self.range, self.seed
        )
    }

    /// Seed as fed to [`rand::SeedableRng::seed_from_u64`].
    ///
    /// Negative seeds keep their two's-complement bit pattern.
    pub fn rng_seed(&self) -> u64 {
        self.seed as u64
    }
}
