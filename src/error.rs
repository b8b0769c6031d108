use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PercolationError {
    InvalidArgument(String),
    /// `index` was not in the half-open range `lo..hi`.
    IndexOutOfRange { index: usize, lo: usize, hi: usize },
    Parse(String),
    /// Input that parsed but does not have the expected shape.
    Malformed(String),
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, PercolationError>;

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PercolationError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            PercolationError::IndexOutOfRange { index, lo, hi } => {
                write!(f, "Index {} out of range {}..{}", index, lo, hi)
            }
            PercolationError::Parse(tok) => write!(f, "Failed to parse integer: {}", tok),
            PercolationError::Malformed(msg) => write!(f, "Malformed input: {}", msg),
            PercolationError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for PercolationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PercolationError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PercolationError {
    fn from(e: io::Error) -> Self {
        PercolationError::Io(e)
    }
}
