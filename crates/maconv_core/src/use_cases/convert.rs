use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::config::ConvertMode;
use crate::error::Error;
use crate::manifest::ManifestEntry;
use crate::mapping;
use crate::ports::{CredentialSink, CredentialSource};

/// Result of one conversion pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOutcome {
    pub converted: usize,
    /// Manifest entries collected per processed file (extended mode only).
    pub entries: Vec<ManifestEntry>,
}

/// Orchestrates the batch conversion:
/// - enumerate input credential files
/// - derive and normalize the identifier per mode
/// - apply the field-aliasing rules
/// - write each record under its original filename
///
/// The first error aborts the whole pass; already-written output is left
/// in place.
pub struct ConvertUseCase<S, K>
where
    S: CredentialSource,
    K: CredentialSink,
{
    source: Arc<S>,
    sink: Arc<K>,
    mode: ConvertMode,
}

impl<S, K> ConvertUseCase<S, K>
where
    S: CredentialSource,
    K: CredentialSink,
{
    pub fn new(source: Arc<S>, sink: Arc<K>, mode: ConvertMode) -> Self {
        Self { source, sink, mode }
    }

    pub async fn execute(&self) -> Result<ConvertOutcome, Error> {
        let files = self.source.list_files().await?;
        self.sink.prepare().await?;

        let mut entries = Vec::new();
        for filename in &files {
            let raw = self.source.read_file(filename).await?;
            let input: Value =
                serde_json::from_str(&raw).map_err(|source| Error::CredentialParse {
                    filename: filename.clone(),
                    source,
                })?;
            if !input.is_object() {
                return Err(Error::NotAnObject(filename.clone()));
            }

            let steam_id = mapping::derive_steam_id(self.mode, &input, filename);
            let record = mapping::build_record(&input, steam_id);
            let contents = serde_json::to_string(&record)
                .map_err(|e| Error::Other(format!("failed to serialize record: {}", e)))?;
            self.sink.write_record(filename, &contents).await?;

            if self.mode == ConvertMode::Extended {
                entries.push(ManifestEntry {
                    filename: filename.clone(),
                    steam_id,
                    account_name: record.account_name.clone(),
                    encryption: None,
                });
            }

            debug!(filename = %filename, "converted credential file");
        }

        Ok(ConvertOutcome {
            converted: files.len(),
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    struct MemorySource {
        files: BTreeMap<String, String>,
    }

    impl MemorySource {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(n, c)| (n.to_string(), c.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl CredentialSource for MemorySource {
        async fn list_files(&self) -> Result<Vec<String>, Error> {
            Ok(self.files.keys().cloned().collect())
        }

        async fn read_file(&self, filename: &str) -> Result<String, Error> {
            self.files
                .get(filename)
                .cloned()
                .ok_or_else(|| Error::Other(format!("no such file: {}", filename)))
        }
    }

    #[derive(Default)]
    struct MemorySink {
        written: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl CredentialSink for MemorySink {
        async fn prepare(&self) -> Result<(), Error> {
            Ok(())
        }

        async fn write_record(&self, filename: &str, contents: &str) -> Result<(), Error> {
            self.written
                .lock()
                .unwrap()
                .push((filename.to_string(), contents.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_converts_every_listed_file() {
        let source = Arc::new(MemorySource::new(&[
            (
                "76561198012345678.maFile",
                r#"{"account_name":"alice","shared_secret":"abc"}"#,
            ),
            (
                "76561198099999999.maFile",
                r#"{"accountName":"bob","sharedSecret":"def"}"#,
            ),
        ]));
        let sink = Arc::new(MemorySink::default());

        let outcome = ConvertUseCase::new(source, sink.clone(), ConvertMode::Extended)
            .execute()
            .await
            .unwrap();

        assert_eq!(outcome.converted, 2);

        let written = sink.written.lock().unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].0, "76561198012345678.maFile");
        assert!(written[0].1.contains("\"account_name\":\"alice\""));
        assert!(written[1].1.contains("\"account_name\":\"bob\""));
    }

    #[tokio::test]
    async fn test_extended_mode_collects_manifest_entries() {
        let source = Arc::new(MemorySource::new(&[(
            "76561198012345678.maFile",
            r#"{"account_name":"alice"}"#,
        )]));
        let sink = Arc::new(MemorySink::default());

        let outcome = ConvertUseCase::new(source, sink, ConvertMode::Extended)
            .execute()
            .await
            .unwrap();

        assert_eq!(outcome.entries.len(), 1);
        let entry = &outcome.entries[0];
        assert_eq!(entry.filename, "76561198012345678.maFile");
        assert_eq!(entry.steam_id, Some(76561198012345678));
        assert_eq!(entry.account_name, "alice");
        assert_eq!(entry.encryption, None);
    }

    #[tokio::test]
    async fn test_legacy_mode_collects_nothing() {
        let source = Arc::new(MemorySource::new(&[(
            "76561198012345678.maFile",
            r#"{"account_name":"alice"}"#,
        )]));
        let sink = Arc::new(MemorySink::default());

        let outcome = ConvertUseCase::new(source, sink, ConvertMode::Legacy)
            .execute()
            .await
            .unwrap();

        assert_eq!(outcome.converted, 1);
        assert!(outcome.entries.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_aborts_run() {
        let source = Arc::new(MemorySource::new(&[
            ("1.maFile", "{not json"),
            ("2.maFile", r#"{"account_name":"late"}"#),
        ]));
        let sink = Arc::new(MemorySink::default());

        let result = ConvertUseCase::new(source, sink.clone(), ConvertMode::Extended)
            .execute()
            .await;

        assert!(matches!(
            result,
            Err(Error::CredentialParse { filename, .. }) if filename == "1.maFile"
        ));
        // Nothing after the failing file was written.
        assert!(sink.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_earlier_output_left_in_place_on_failure() {
        let source = Arc::new(MemorySource::new(&[
            ("1.maFile", r#"{"account_name":"early"}"#),
            ("2.maFile", "[]"),
        ]));
        let sink = Arc::new(MemorySink::default());

        let result = ConvertUseCase::new(source, sink.clone(), ConvertMode::Extended)
            .execute()
            .await;

        assert!(matches!(result, Err(Error::NotAnObject(f)) if f == "2.maFile"));
        assert_eq!(sink.written.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_source_converts_zero_files() {
        let source = Arc::new(MemorySource::new(&[]));
        let sink = Arc::new(MemorySink::default());

        let outcome = ConvertUseCase::new(source, sink, ConvertMode::Extended)
            .execute()
            .await
            .unwrap();

        assert_eq!(outcome.converted, 0);
        assert!(outcome.entries.is_empty());
    }
}
