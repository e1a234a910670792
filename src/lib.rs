//! Market split (markshare) instance generator.
//!
//! Produces hard 0-1 feasibility problems `A x = b, x ∈ {0,1}^n` with
//! `m` equations and `n = 10·(m-1)` variables. Coefficients are drawn
//! uniformly from `[0, D-1]` with a seeded generator, and
//! `b_i = floor(Σ_j a_ij / 2)`. Instances are written in a sparse triple
//! format to `markshare_<m>_<D>_<seed>.dat`.
//!
//! # Modules
//!
//! - **`models`**: `InstanceParams` (`m`, `D`, seed) and `Instance` (matrix + rhs)
//! - **`random`**: `UniformSource` seam, seeded and fixed-sequence sources
//! - **`generator`**: Row-major instance synthesis
//! - **`format`**: Sparse `.dat` and dense CSV readers/writers
//! - **`validation`**: Structural checks on instances and `.dat` text
//! - **`stats`**: Instance summary statistics
//! - **`check`**: Solution parsing and verification
//! - **`permute`**: Permutation enumeration for the `permutations` tool
//!
//! # Reproducibility
//!
//! The same `(m, D, seed)` always yields the same file with this crate.
//! Output is not bit-compatible with other implementations' generators.
//!
//! # References
//!
//! - Cornuéjols & Dawande (1998), "A Class of Hard Small 0-1 Programs", IPCO VI
//! - Aardal et al. (2000), "Market split and basis reduction: towards a
//!   solution of the Cornuéjols-Dawande instances", INFORMS J. Comput. 12(3)

pub mod check;
pub mod error;
pub mod format;
pub mod generator;
pub mod logging;
pub mod models;
pub mod permute;
pub mod random;
pub mod stats;
pub mod validation;

pub use error::{Error, Result};
