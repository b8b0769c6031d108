#[macro_use]
extern crate log;

pub mod client;
pub mod error;
pub mod input;
pub mod percolation;
pub mod stats;
pub mod uf;

pub use crate::error::PercolationError;
pub use crate::percolation::PercolationGrid;
pub use crate::stats::PercolationStats;
pub use crate::uf::DisjointSetForest;
