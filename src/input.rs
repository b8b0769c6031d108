use std::io::BufRead;

use crate::error::PercolationError;
use crate::error::Result;

/// Reads every whitespace-separated token from `r` as a `usize`.
pub fn read_ints<R: BufRead>(r: &mut R) -> Result<Vec<usize>> {
    let mut vals = Vec::new();
    for l in r.lines() {
        let l = l?;
        for w in l.split_whitespace() {
            match w.parse::<usize>() {
                Ok(v) => vals.push(v),
                Err(_) => return Err(PercolationError::Parse(w.to_string())),
            }
        }
    }
    Ok(vals)
}

/// Splits `vals` into its leading count and the pairs that follow it.
pub fn header_and_pairs(vals: &[usize]) -> Result<(usize, Vec<(usize, usize)>)> {
    let (&first, rest) = match vals.split_first() {
        Some(s) => s,
        None => return Err(PercolationError::Malformed("missing size header".to_string())),
    };
    if rest.len() % 2 != 0 {
        return Err(PercolationError::Malformed("unpaired trailing value".to_string()));
    }
    let pairs = rest.chunks(2).map(|c| (c[0], c[1])).collect();
    Ok((first, pairs))
}
