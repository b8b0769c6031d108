use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::PercolationError;
use crate::error::Result;
use crate::percolation::PercolationGrid;

/// Opens the sites of a fresh `n`-by-`n` grid in a uniformly random order
/// until it percolates, and returns how many were opened.
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<usize> {
    let mut grid = PercolationGrid::new(n)?;
    let mut order: Vec<usize> = (1..=n * n).collect();
    order.shuffle(rng);
    for p in order {
        grid.open(p)?;
        if grid.percolates() {
            break;
        }
    }
    Ok(grid.open_count())
}

/// Monte Carlo estimate of the percolation threshold.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    thresholds: Vec<f64>,
    mu: f64,
    sd: f64,
}

impl PercolationStats {
    /// Runs `trials` independent trials on `n`-by-`n` grids, recording the
    /// fraction of sites open when each one first percolated.
    pub fn new<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<PercolationStats> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument("non-positive N".to_string()));
        }
        if trials == 0 {
            return Err(PercolationError::InvalidArgument("non-positive T".to_string()));
        }
        let sites = n as f64 * n as f64;
        let mut thresholds = Vec::with_capacity(trials);
        for t in 0..trials {
            let opened = run_trial(n, rng)?;
            debug!("trial {}: {} of {} sites open", t, opened, n * n);
            thresholds.push(opened as f64 / sites);
        }

        let mu = thresholds.iter().sum::<f64>() / trials as f64;
        let sd = if trials == 1 {
            f64::NAN
        } else {
            let ss: f64 = thresholds.iter().map(|x| (x - mu) * (x - mu)).sum();
            (ss / (trials - 1) as f64).sqrt()
        };
        info!("{} trials on {}x{} grid: mean {}, stddev {}", trials, n, n, mu, sd);
        Ok(PercolationStats { n, thresholds, mu, sd })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.mu
    }

    /// Sample standard deviation; NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        self.sd
    }

    fn half_width(&self) -> f64 {
        1.96 * self.sd / (self.trials() as f64).sqrt()
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mu - self.half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mu + self.half_width()
    }
}

impl fmt::Display for PercolationStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "mean                    = {}", self.mean())?;
        writeln!(f, "stddev                  = {}", self.stddev())?;
        write!(f, "95% confidence interval = {}, {}", self.confidence_lo(), self.confidence_hi())
    }
}
