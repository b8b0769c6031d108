extern crate percolate;

use clap::Parser;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use percolate::client;
use percolate::error::Result;

/// Replay a file of sites to open: the grid size N, then `row col` pairs.
#[derive(Parser, Debug)]
#[command(name = "percolation", version)]
struct Args {
    file: PathBuf,
}

fn replay(args: &Args) -> Result<bool> {
    let fin = File::open(&args.file)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    client::replay_sites(&mut BufReader::new(fin), &mut out)
}

pub fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = replay(&args) {
        eprintln!("Error processing {}: {}", args.file.display(), e);
        process::exit(1);
    }
}
