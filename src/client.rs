//! The replay loops behind the `percolation` and `union-find` binaries.

use std::io::BufRead;
use std::io::Write;

use crate::error::Result;
use crate::input;
use crate::percolation::PercolationGrid;
use crate::uf::DisjointSetForest;

fn write_parents<W: Write>(ds: &DisjointSetForest, w: &mut W) -> Result<()> {
    let mut first = true;
    for p in ds.parents() {
        if first {
            write!(w, "{}", p)?;
        } else {
            write!(w, " {}", p)?;
        }
        first = false;
    }
    writeln!(w)?;
    Ok(())
}

/// Reads a grid size N followed by `row col` pairs, opens each site and
/// echoes it, then reports whether the grid percolates.
pub fn replay_sites<R: BufRead, W: Write>(r: &mut R, w: &mut W) -> Result<bool> {
    let vals = input::read_ints(r)?;
    let (n, sites) = input::header_and_pairs(&vals)?;
    let mut grid = PercolationGrid::new(n)?;
    for (i, j) in sites {
        grid.open_site(i, j)?;
        writeln!(w, "{} {}", i, j)?;
    }
    let perc = grid.percolates();
    if perc {
        writeln!(w, "percolates")?;
    } else {
        writeln!(w, "does not percolate")?;
    }
    Ok(perc)
}

/// Reads an element count M followed by `p q` pairs. Each pair not already
/// connected is merged and printed with the parent array that results;
/// the component count and final parent array close the output.
pub fn replay_unions<R: BufRead, W: Write>(r: &mut R, w: &mut W) -> Result<usize> {
    let vals = input::read_ints(r)?;
    let (m, pairs) = input::header_and_pairs(&vals)?;
    let mut ds = DisjointSetForest::new(m);
    for (p, q) in pairs {
        if ds.connected(p, q)? {
            continue;
        }
        ds.union(p, q)?;
        write!(w, "{} {} ", p, q)?;
        write_parents(&ds, w)?;
    }
    writeln!(w, "{} components", ds.set_count())?;
    write_parents(&ds, w)?;
    Ok(ds.set_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PercolationError;

    fn run_unions(s: &str) -> (usize, String) {
        let mut out = Vec::new();
        let count = replay_unions(&mut s.as_bytes(), &mut out).unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    fn run_sites(s: &str) -> (bool, String) {
        let mut out = Vec::new();
        let perc = replay_sites(&mut s.as_bytes(), &mut out).unwrap();
        (perc, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_unions_output() {
        let (count, out) = run_unions("4\n0 1\n2 3\n1 0\n1 2\n");
        assert_eq!(count, 1);
        let expected = "0 1 0 0 2 3\n\
                        2 3 0 0 2 2\n\
                        1 2 0 0 0 2\n\
                        1 components\n\
                        0 0 0 2\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_unions_no_pairs() {
        let (count, out) = run_unions("3");
        assert_eq!(count, 3);
        assert_eq!(out, "3 components\n0 1 2\n");
    }

    #[test]
    fn test_unions_out_of_range() {
        let mut out = Vec::new();
        match replay_unions(&mut "2\n0 5\n".as_bytes(), &mut out) {
            Err(PercolationError::IndexOutOfRange { index: 5, .. }) => (),
            r => panic!("unexpected {:?}", r),
        }
    }

    #[test]
    fn test_sites_percolate() {
        let (perc, out) = run_sites("3\n1 2\n2 2\n3 2\n");
        assert!(perc);
        assert_eq!(out, "1 2\n2 2\n3 2\npercolates\n");
    }

    #[test]
    fn test_sites_blocked() {
        let (perc, out) = run_sites("3\n1 1\n2 2\n3 3\n");
        assert!(!perc);
        assert_eq!(out, "1 1\n2 2\n3 3\ndoes not percolate\n");
    }

    #[test]
    fn test_sites_bad_coordinate() {
        let mut out = Vec::new();
        assert!(replay_sites(&mut "2\n1 1\n3 1\n".as_bytes(), &mut out).is_err());
        assert_eq!(String::from_utf8(out).unwrap(), "1 1\n");
        let mut out = Vec::new();
        match replay_sites(&mut "2\n1".as_bytes(), &mut out) {
            Err(PercolationError::Malformed(_)) => (),
            r => panic!("unexpected {:?}", r),
        }
    }
}
