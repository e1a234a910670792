use std::io::{self, BufWriter, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use u_markshare::logging;
use u_markshare::permute::for_each_permutation;

#[derive(Parser, Debug)]
#[command(author, version, about = "Prints every permutation of 1..=n, one per line", long_about = None)]
struct Args {
    /// Number of elements (positive)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    n: u32,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut write_err: Option<io::Error> = None;

    for_each_permutation(args.n as usize, |perm| {
        if write_err.is_some() {
            return;
        }
        let line: Vec<String> = perm.iter().map(usize::to_string).collect();
        if let Err(e) = writeln!(out, "{}", line.join(" ")) {
            write_err = Some(e);
        }
    })
    .context("allocating permutation buffer")?;

    if let Some(e) = write_err {
        bail!("writing permutations: {e}");
    }
    out.flush()?;
    Ok(())
}
