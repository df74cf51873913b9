use async_trait::async_trait;

use crate::error::Error;
use crate::manifest::Manifest;

/// Source of input credential files.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// List credential filenames, sorted lexicographically. Creates the
    /// input location when it does not exist yet.
    async fn list_files(&self) -> Result<Vec<String>, Error>;

    /// Read the raw content of one credential file.
    async fn read_file(&self, filename: &str) -> Result<String, Error>;
}

/// Destination for converted credential records.
#[async_trait]
pub trait CredentialSink: Send + Sync {
    /// Ensure the output location exists. Idempotent.
    async fn prepare(&self) -> Result<(), Error>;

    /// Write one serialized record, overwriting any same-named file.
    async fn write_record(&self, filename: &str, contents: &str) -> Result<(), Error>;
}

/// The companion application's manifest document.
#[async_trait]
pub trait ManifestStore: Send + Sync {
    /// Load and parse the external manifest.
    async fn load(&self) -> Result<Manifest, Error>;

    /// Write the merged manifest copy. Never touches the source document.
    async fn save(&self, manifest: &Manifest) -> Result<(), Error>;
}
