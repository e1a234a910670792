//! Market split instance synthesis.
//!
//! For each row `i` in order, draws `n = 10·(m-1)` coefficients in
//! ascending column order from `[0, D-1]`, then sets
//! `b_i = floor(Σ_j a_ij / 2)`. Draw order is row-major and is part of
//! the reproducibility contract: a different order yields a different
//! instance for the same seed.
//!
//! The generator does not check or enforce feasibility.
//!
//! # Reference
//! - Cornuéjols & Dawande (1998), "A Class of Hard Small 0-1 Programs", IPCO VI
//! - Aardal et al. (2000), "Market split and basis reduction", INFORMS J. Comput. 12(3)

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::format::write_sparse_file;
use crate::models::{Instance, InstanceParams};
use crate::random::{draw_below, SeededUniform, UniformSource};

/// Generates the instance for `params`, seeding a [`SeededUniform`] from
/// `params.seed`.
///
/// # Example
/// ```
/// use u_markshare::generator::generate;
/// use u_markshare::models::InstanceParams;
///
/// let params = InstanceParams::new(3, 100, 42);
/// let instance = generate(&params).unwrap();
/// assert_eq!(instance.num_rows(), 3);
/// assert_eq!(instance.num_cols(), 20);
/// ```
pub fn generate(params: &InstanceParams) -> Result<Instance> {
    let mut source = SeededUniform::new(params.rng_seed());
    generate_with(params, &mut source)
}

/// Generates the instance for `params`, drawing from `source`.
///
/// Consumes exactly `m·n` values from `source`.
pub fn generate_with<S: UniformSource + ?Sized>(
    params: &InstanceParams,
    source: &mut S,
) -> Result<Instance> {
    params.validate()?;
    let num_rows = params.num_rows;
    let num_cols = params
        .num_cols()
        .ok_or(Error::DimensionOverflow { num_rows })?;

    if num_cols == 0 {
        warn!(num_rows, "single equation: instance has no variables");
    }
    if params.range == 1 {
        warn!("D = 1: every coefficient is zero");
    }

    let mut instance = Instance::zeroed(num_rows, num_cols)?;

    for i in 0..num_rows {
        let mut sum: u64 = 0;
        for entry in instance.row_mut(i).iter_mut() {
            let value = draw_below(source, params.range);
            *entry = value;
            sum += u64::from(value);
        }
        instance.set_rhs(i, sum / 2);
        debug!(row = i + 1, sum, rhs = sum / 2, "row synthesized");
    }

    info!(
        m = num_rows,
        n = num_cols,
        d = params.range,
        seed = params.seed,
        "instance generated"
    );
    Ok(instance)
}

/// Generates the instance for `params` and writes it to
/// `dir/markshare_<m>_<D>_<seed>.dat`.
///
/// Returns the written path together with the instance.
pub fn generate_file(
    params: &InstanceParams,
    dir: impl AsRef<Path>,
) -> Result<(PathBuf, Instance)> {
    let instance = generate(params)?;
    let path = dir.as_ref().join(params.file_name());
    write_sparse_file(&instance, &path)?;
    Ok((path, instance))
}
