mod convert;
mod merge_manifest;

pub use convert::{ConvertOutcome, ConvertUseCase};
pub use merge_manifest::{MergeManifestUseCase, MergeOutcome};
