use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use maconv_core::manifest::Manifest;
use maconv_core::ports::ManifestStore;
use maconv_core::Error;
use tokio::fs;
use tracing::{debug, instrument};

/// File-based manifest store. Reads the companion application's manifest
/// and writes the merged copy to a separate output path; the source
/// document is never modified.
pub struct FileManifestStore {
    source_path: PathBuf,
    output_path: PathBuf,
}

impl FileManifestStore {
    pub fn new(source_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            source_path,
            output_path,
        }
    }
}

#[async_trait]
impl ManifestStore for FileManifestStore {
    #[instrument(skip(self))]
    async fn load(&self) -> Result<Manifest, Error> {
        let raw = match fs::read_to_string(&self.source_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::ManifestNotFound(self.source_path.clone()))
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|source| Error::ManifestParse {
            path: self.source_path.clone(),
            source,
        })
    }

    #[instrument(skip(self, manifest))]
    async fn save(&self, manifest: &Manifest) -> Result<(), Error> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let contents = serde_json::to_string(manifest)
            .map_err(|e| Error::Other(format!("failed to serialize manifest: {}", e)))?;
        fs::write(&self.output_path, contents).await?;

        debug!(entries = manifest.entries.len(), "wrote merged manifest");
        Ok(())
    }
}
