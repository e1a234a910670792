use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use u_markshare::check::{is_inline_solution, parse_solution, verify};
use u_markshare::format::{detect_format, parse_instance, InstanceFormat};
use u_markshare::logging;
use u_markshare::models::VARS_PER_ROW;

#[derive(Parser, Debug)]
#[command(author, version, about = "Checks a 0-1 solution against a market split instance", long_about = None)]
struct Args {
    /// Instance file, sparse .dat or dense CSV
    instance: PathBuf,

    /// Solution file, or an inline string of 0s and 1s
    solution: String,

    /// Number of variables of a sparse instance [default: 10·(m-1)]
    #[arg(short = 'n', long = "vars")]
    num_vars: Option<usize>,
}

fn main() -> Result<ExitCode> {
    logging::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.instance)
        .with_context(|| format!("reading {}", args.instance.display()))?;
    let num_vars = match (detect_format(&text), args.num_vars) {
        (InstanceFormat::Sparse, None) => Some(sparse_num_vars(&text)?),
        (_, n) => n,
    };
    let instance = parse_instance(&text, num_vars)
        .with_context(|| format!("parsing {}", args.instance.display()))?;
    println!("Problem has {} variables.", instance.num_cols());

    let solution_text = if is_inline_solution(&args.solution) {
        args.solution.clone()
    } else {
        fs::read_to_string(&args.solution).with_context(|| format!("reading {}", args.solution))?
    };
    let solution = parse_solution(&solution_text, instance.num_cols())?;
    let report = verify(&instance, &solution)?;

    for row in &report.rows {
        if row.holds() {
            println!("Constraint {} ok", row.row);
        } else {
            println!(
                "Constraint {} failed: expected {} got {}",
                row.row, row.rhs, row.lhs
            );
        }
    }

    if report.is_feasible() {
        println!("Solution successfully verified");
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// `10·(m-1)` for the largest row index in sparse text.
fn sparse_num_vars(text: &str) -> Result<usize> {
    let num_rows = text
        .lines()
        .filter_map(|line| line.split_whitespace().next()?.parse::<usize>().ok())
        .max()
        .unwrap_or(0);
    num_rows
        .saturating_sub(1)
        .checked_mul(VARS_PER_ROW)
        .ok_or_else(|| anyhow!("row index {num_rows} is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_num_vars() {
        assert_eq!(sparse_num_vars("1 1 3\n1 0 1\n3 0 0\n").unwrap(), 20);
        assert_eq!(sparse_num_vars("1 0 0\n").unwrap(), 0);
        assert_eq!(sparse_num_vars("").unwrap(), 0);
    }

    #[test]
    fn test_sparse_num_vars_huge_row() {
        let text = format!("{} 0 0\n", usize::MAX);
        let err = sparse_num_vars(&text).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["markshare-check", "a.dat", "0101", "-n", "4"]).unwrap();
        assert_eq!(args.num_vars, Some(4));
        assert!(Args::try_parse_from(["markshare-check", "a.dat"]).is_err());
    }
}
