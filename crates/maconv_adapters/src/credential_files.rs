use std::path::PathBuf;

use async_trait::async_trait;
use maconv_core::ports::{CredentialSink, CredentialSource};
use maconv_core::steam_id::CREDENTIAL_FILE_SUFFIX;
use maconv_core::Error;
use tokio::fs;
use tracing::{debug, instrument};

/// Reads `.maFile` credentials from the input directory.
pub struct DirCredentialSource {
    input_dir: PathBuf,
}

impl DirCredentialSource {
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }
}

#[async_trait]
impl CredentialSource for DirCredentialSource {
    #[instrument(skip(self))]
    async fn list_files(&self) -> Result<Vec<String>, Error> {
        fs::create_dir_all(&self.input_dir).await?;

        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.input_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(CREDENTIAL_FILE_SUFFIX) {
                names.push(name);
            }
        }

        // Directory order is filesystem-dependent; sort for reproducible runs.
        names.sort();

        debug!(count = names.len(), "listed credential files");
        Ok(names)
    }

    async fn read_file(&self, filename: &str) -> Result<String, Error> {
        Ok(fs::read_to_string(self.input_dir.join(filename)).await?)
    }
}

/// Writes converted records into the output directory, overwriting any
/// same-named file.
pub struct DirCredentialSink {
    output_dir: PathBuf,
}

impl DirCredentialSink {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }
}

#[async_trait]
impl CredentialSink for DirCredentialSink {
    async fn prepare(&self) -> Result<(), Error> {
        fs::create_dir_all(&self.output_dir).await?;
        Ok(())
    }

    #[instrument(skip(self, contents))]
    async fn write_record(&self, filename: &str, contents: &str) -> Result<(), Error> {
        fs::write(self.output_dir.join(filename), contents).await?;
        Ok(())
    }
}
