use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use u_markshare::format::{csv_path_for, parse_sparse, write_dense_file};
use u_markshare::logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Converts a sparse .dat instance to dense CSV", long_about = None)]
struct Args {
    /// Sparse instance file (.dat)
    input: PathBuf,

    /// Number of variables; defaults to the largest column index in the file
    #[arg(short = 'n', long = "vars")]
    num_vars: Option<usize>,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let output = csv_path_for(&args.input)?;
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let instance = parse_sparse(&text, args.num_vars)
        .with_context(|| format!("parsing {}", args.input.display()))?;
    write_dense_file(&instance, &output)
        .with_context(|| format!("writing {}", output.display()))?;

    println!(
        "Matrix has been converted to CSV and saved to {}",
        output.display()
    );
    Ok(())
}
