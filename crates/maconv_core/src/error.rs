use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse credential file {filename}: {source}")]
    CredentialParse {
        filename: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("credential file {0} is not a JSON object")]
    NotAnObject(String),

    #[error("manifest not found at {0}")]
    ManifestNotFound(PathBuf),

    #[error("failed to parse manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
