extern crate percolate;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;

use percolate::stats::PercolationStats;

/// Estimate the percolation threshold of an N-by-N grid.
#[derive(Parser, Debug)]
#[command(name = "percolation-stats", version)]
struct Args {
    /// Side length of the square grid
    n: usize,

    /// Number of trials to run
    trials: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

pub fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    match PercolationStats::new(args.n, args.trials, &mut rng) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
