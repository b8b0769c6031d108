use crate::error::PercolationError;
use crate::error::Result;
use crate::uf::DisjointSetForest;

const VIRTUAL_TOP: usize = 0;

/// An N-by-N grid of sites, each open or closed.
///
/// Sites are numbered `1..=n*n` in row-major order starting from the
/// northwest corner. Index 0 and `n*n + 1` are the virtual top and bottom
/// nodes; for `n > 1` the whole top row is joined to the first and the
/// whole bottom row to the second when the grid is built, so percolation
/// is a single `connected` query.
#[derive(Debug, Clone)]
pub struct PercolationGrid {
    n: usize,
    forest: DisjointSetForest,
    open: Vec<bool>,
    open_count: usize,
}

impl PercolationGrid {
    pub fn new(n: usize) -> Result<PercolationGrid> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument("non-positive N".to_string()));
        }
        let len = n
            .checked_mul(n)
            .and_then(|c| c.checked_add(2))
            .ok_or_else(|| PercolationError::InvalidArgument(format!("grid size {} too large", n)))?;
        let mut grid = PercolationGrid {
            n,
            forest: DisjointSetForest::new(len),
            open: vec![false; len],
            open_count: 0,
        };
        // With one row the top and bottom rows coincide, so joining both
        // here would make an all-closed grid percolate. `open` handles it.
        if n > 1 {
            let bottom = grid.virtual_bottom();
            let last_row = n * (n - 1);
            for k in 1..=n {
                grid.forest.union(k, VIRTUAL_TOP)?;
                grid.forest.union(last_row + k, bottom)?;
            }
        }
        debug!("built {}x{} percolation grid", n, n);
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of distinct open sites.
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }

    fn check(&self, p: usize) -> Result<()> {
        if self.valid(p) {
            Ok(())
        } else {
            Err(PercolationError::IndexOutOfRange { index: p, lo: 1, hi: self.virtual_bottom() })
        }
    }

    /// Whether `p` names a real site. Used to filter neighbor candidates.
    pub fn valid(&self, p: usize) -> bool {
        if p <= VIRTUAL_TOP || p >= self.virtual_bottom() {
            return false;
        }
        let (row, col) = self.decode(p);
        row >= 1 && col >= 1 && row <= self.n && col <= self.n
    }

    fn decode(&self, p: usize) -> (usize, usize) {
        ((p - 1) / self.n + 1, (p - 1) % self.n + 1)
    }

    /// Site index of the 1-based coordinates `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> Result<usize> {
        for &i in &[row, col] {
            if i < 1 || i > self.n {
                return Err(PercolationError::IndexOutOfRange { index: i, lo: 1, hi: self.n + 1 });
            }
        }
        Ok((row - 1) * self.n + col)
    }

    pub fn coordinates(&self, p: usize) -> Result<(usize, usize)> {
        self.check(p)?;
        Ok(self.decode(p))
    }

    /// The up to four sites sharing an edge with `p`: left, above, below,
    /// right. Left and right never wrap into a neighboring row.
    fn neighbors(&self, p: usize) -> [Option<usize>; 4] {
        let n = self.n;
        let (row, col) = self.decode(p);
        [
            if col > 1 { Some(p - 1) } else { None },
            if row > 1 { Some(p - n) } else { None },
            if row < n { Some(p + n) } else { None },
            if col < n { Some(p + 1) } else { None },
        ]
    }

    /// Opens site `p` and joins it to each open neighbor. Opening an
    /// already open site changes nothing.
    pub fn open(&mut self, p: usize) -> Result<()> {
        self.check(p)?;
        if self.open[p] {
            return Ok(());
        }
        self.open[p] = true;
        self.open_count += 1;

        if self.n == 1 {
            let bottom = self.virtual_bottom();
            self.forest.union(p, VIRTUAL_TOP)?;
            self.forest.union(p, bottom)?;
        }

        let candidates = self.neighbors(p);
        for &q in candidates.iter().flatten() {
            if self.valid(q) && self.open[q] {
                self.forest.union(p, q)?;
            }
        }
        Ok(())
    }

    pub fn is_open(&self, p: usize) -> Result<bool> {
        self.check(p)?;
        Ok(self.open[p])
    }

    /// An open site connected to the top row through open sites.
    pub fn is_full(&self, p: usize) -> Result<bool> {
        Ok(self.is_open(p)? && self.forest.connected(VIRTUAL_TOP, p)?)
    }

    pub fn percolates(&self) -> bool {
        self.forest.root(VIRTUAL_TOP) == self.forest.root(self.virtual_bottom())
    }

    pub fn open_site(&mut self, row: usize, col: usize) -> Result<()> {
        let p = self.index(row, col)?;
        self.open(p)
    }

    pub fn is_open_site(&self, row: usize, col: usize) -> Result<bool> {
        self.is_open(self.index(row, col)?)
    }

    pub fn is_full_site(&self, row: usize, col: usize) -> Result<bool> {
        self.is_full(self.index(row, col)?)
    }
}
