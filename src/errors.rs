use std::path::PathBuf;

use thiserror::Error;


/// Result alias used by the loaders
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors raised while reading route inputs.
/// The search itself never fails: an unreachable goal is a normal result.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Input file missing or unreadable
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read failure on an already opened source
    #[error("failed reading {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// Numeric column holds something that is not a real number
    #[error("{source_name}:{line}: expected a number, found '{value}'")]
    InvalidNumber {
        source_name: String,
        line: usize,
        value: String,
    },
}
