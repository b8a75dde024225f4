use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("geometry file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse XYZ data: {details} (at line {line})")]
    Parse { line: usize, details: String },

    #[error("geometry must contain at least 2 atoms to form a pair, found {found}")]
    TooFewAtoms { found: usize },
}

impl Error {
    pub fn parse(line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            line,
            details: details.into(),
        }
    }

    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::TooFewAtoms { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
