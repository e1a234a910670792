use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use u_markshare::generator::generate_file;
use u_markshare::logging;
use u_markshare::models::InstanceParams;
use u_markshare::stats::InstanceStats;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generates a market split instance and writes it to markshare_<m>_<D>_<seed>.dat",
    long_about = None
)]
struct Args {
    /// Number of equations
    #[arg(value_name = "m")]
    num_rows: usize,

    /// Coefficients are drawn from [0, D-1]
    #[arg(value_name = "D")]
    range: u32,

    /// Seed for the random number generator
    #[arg(value_name = "seed", allow_negative_numbers = true)]
    seed: i64,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    let params = InstanceParams::new(args.num_rows, args.range, args.seed);
    run(&params, Path::new("."))?;
    println!("{}", status_line(&params));
    Ok(())
}

/// Generates and writes the instance into `dir`.
fn run(params: &InstanceParams, dir: &Path) -> Result<PathBuf> {
    let (path, instance) = generate_file(params, dir)
        .with_context(|| format!("failed to generate {}", params.file_name()))?;

    let stats = InstanceStats::calculate(&instance);
    info!(
        nonzeros = stats.nonzeros,
        density = stats.density,
        max_coefficient = stats.max_coefficient,
        path = %path.display(),
        "instance statistics"
    );
    Ok(path)
}

fn status_line(params: &InstanceParams) -> String {
    format!("Problem written to: {}", params.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(argv: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("markshare-gen").chain(argv.iter().copied()))
    }

    #[test]
    fn test_three_positionals() {
        let args = parse(&["5", "100", "42"]).unwrap();
        assert_eq!((args.num_rows, args.range, args.seed), (5, 100, 42));
    }

    #[test]
    fn test_negative_seed() {
        let args = parse(&["3", "10", "-7"]).unwrap();
        assert_eq!(args.seed, -7);
    }

    #[test]
    fn test_wrong_arg_count_is_usage_error() {
        for argv in [&["5", "100"][..], &["5", "100", "42", "9"][..], &[][..]] {
            let err = parse(argv).unwrap_err();
            assert!(matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
            ));
            assert_ne!(err.exit_code(), 0);
            assert!(err.use_stderr());
        }
    }

    #[test]
    fn test_non_numeric_is_usage_error() {
        let err = parse(&["five", "100", "42"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_run_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let params = InstanceParams::new(5, 100, 42);
        let path = run(&params, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("markshare_5_100_42.dat"));
        assert!(path.exists());
        assert_eq!(
            status_line(&params),
            "Problem written to: markshare_5_100_42.dat"
        );
    }

    #[test]
    fn test_run_rejects_zero_rows() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&InstanceParams::new(0, 100, 1), dir.path()).unwrap_err();
        assert!(err.to_string().contains("markshare_0_100_1.dat"));
        assert!(!dir.path().join("markshare_0_100_1.dat").exists());
    }
}
