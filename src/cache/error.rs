use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cache store I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cache store {} is corrupt: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode cache store: {0}")]
    Encode(#[from] toml::ser::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
