//! Errors from the outer surface. The check itself never fails; it only
//! skips what it cannot judge.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for keyedlit operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The directory is not a crate
    #[error("no Cargo.toml found in {}", .0.display())]
    NoManifest(PathBuf),

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A single source handed to `check_source` did not parse
    #[error("{0}")]
    Syntax(String),
}
