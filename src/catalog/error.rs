use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a catalog. No partial catalog is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
