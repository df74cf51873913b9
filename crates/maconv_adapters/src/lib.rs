pub mod configuration;
pub mod credential_files;
pub mod manifest_store;
pub mod telemetry;

// Re-exports for convenience
pub use credential_files::{DirCredentialSink, DirCredentialSource};
pub use manifest_store::FileManifestStore;
