extern crate percolate;

use clap::Parser;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use percolate::client;
use percolate::error::PercolationError;

/// Replay a stream of connections: the element count M, then `p q` pairs.
/// Reads standard input when no file is given.
#[derive(Parser, Debug)]
#[command(name = "union-find", version)]
struct Args {
    file: Option<PathBuf>,
}

pub fn main() {
    env_logger::init();
    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let r = match &args.file {
        Some(path) => File::open(path)
            .map_err(PercolationError::from)
            .and_then(|f| client::replay_unions(&mut BufReader::new(f), &mut out)),
        None => {
            let stdin = io::stdin();
            let mut lock = stdin.lock();
            client::replay_unions(&mut lock, &mut out)
        }
    };
    if let Err(e) = r {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
