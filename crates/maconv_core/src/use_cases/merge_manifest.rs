use std::sync::Arc;

use tracing::debug;

use crate::error::Error;
use crate::manifest::ManifestEntry;
use crate::ports::ManifestStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    pub appended: usize,
    pub total: usize,
}

/// Merges identities discovered during a conversion pass into the
/// companion manifest: load, normalize existing identifiers, append
/// entries whose identifier is not yet present, save the merged copy.
pub struct MergeManifestUseCase<M>
where
    M: ManifestStore,
{
    store: Arc<M>,
}

impl<M> MergeManifestUseCase<M>
where
    M: ManifestStore,
{
    pub fn new(store: Arc<M>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, collected: Vec<ManifestEntry>) -> Result<MergeOutcome, Error> {
        let mut manifest = self.store.load().await?;
        manifest.normalize();

        let appended = manifest.merge(collected);
        self.store.save(&manifest).await?;

        debug!(appended, total = manifest.entries.len(), "merged manifest");

        Ok(MergeOutcome {
            appended,
            total: manifest.entries.len(),
        })
    }
}
