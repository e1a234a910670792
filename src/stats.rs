//! Instance summary statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Nonzeros | Number of coefficients `a_ij ≠ 0` (lines in the `.dat` body) |
//! | Density | Nonzeros / (m·n) |
//! | Row sums | `Σ_j a_ij` per row |
//! | Max coefficient | Largest `a_ij` |
//! | Mean coefficient | Mean of all `a_ij`, zeros included |
//!
//! For uniform draws from `[0, D-1]` the expected density is `(D-1)/D`
//! and the expected mean is `(D-1)/2`.

use crate::models::Instance;

/// Summary of one instance.
#[derive(Debug, Clone)]
pub struct InstanceStats {
    /// Number of equations.
    pub num_rows: usize,
    /// Number of variables.
    pub num_cols: usize,
    /// Count of nonzero coefficients.
    pub nonzeros: usize,
    /// Fraction of nonzero cells (0.0..1.0). `0.0` when there are no cells.
    pub density: f64,
    /// Sum of each row.
    pub row_sums: Vec<u64>,
    /// Largest coefficient, `0` when there are no cells.
    pub max_coefficient: u32,
    /// Mean coefficient, `0.0` when there are no cells.
    pub mean_coefficient: f64,
}

impl InstanceStats {
    /// Computes statistics for `instance`.
    pub fn calculate(instance: &Instance) -> Self {
        let cells = instance.num_rows() * instance.num_cols();
        let nonzeros = instance.nonzero_count();
        let row_sums: Vec<u64> = (0..instance.num_rows())
            .map(|i| instance.row_sum(i))
            .collect();
        let total: u64 = row_sums.iter().sum();

        let (density, mean_coefficient) = if cells == 0 {
            (0.0, 0.0)
        } else {
            (
                nonzeros as f64 / cells as f64,
                total as f64 / cells as f64,
            )
        };

        Self {
            num_rows: instance.num_rows(),
            num_cols: instance.num_cols(),
            nonzeros,
            density,
            row_sums,
            max_coefficient: instance.max_coefficient().unwrap_or(0),
            mean_coefficient,
        }
    }

    /// Number of lines the sparse `.dat` form takes: nonzeros plus one
    /// rhs line per row.
    pub fn sparse_lines(&self) -> usize {
        self.nonzeros + self.num_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::to_sparse_string;
    use crate::generator::generate;
    use crate::models::InstanceParams;

    #[test]
    fn test_stats_basic() {
        let inst = Instance::from_rows(vec![vec![4, 0], vec![0, 2]], vec![2, 1]).unwrap();
        let stats = InstanceStats::calculate(&inst);
        assert_eq!(stats.nonzeros, 2);
        assert!((stats.density - 0.5).abs() < 1e-10);
        assert_eq!(stats.row_sums, vec![4, 2]);
        assert_eq!(stats.max_coefficient, 4);
        assert!((stats.mean_coefficient - 1.5).abs() < 1e-10);
        assert_eq!(stats.sparse_lines(), 4);
    }

    #[test]
    fn test_stats_empty_columns() {
        let inst = generate(&InstanceParams::new(1, 100, 0)).unwrap();
        let stats = InstanceStats::calculate(&inst);
        assert_eq!(stats.nonzeros, 0);
        assert!((stats.density - 0.0).abs() < 1e-10);
        assert_eq!(stats.max_coefficient, 0);
        assert_eq!(stats.sparse_lines(), 1);
    }

    #[test]
    fn test_sparse_lines_matches_output() {
        let inst = generate(&InstanceParams::new(5, 20, 4)).unwrap();
        let stats = InstanceStats::calculate(&inst);
        assert_eq!(stats.sparse_lines(), to_sparse_string(&inst).lines().count());
    }

    #[test]
    fn test_density_near_expected() {
        // D = 2: each cell is nonzero with probability 1/2.
        let inst = generate(&InstanceParams::new(40, 2, 123)).unwrap();
        let stats = InstanceStats::calculate(&inst);
        assert!((stats.density - 0.5).abs() < 0.05);
    }
}
