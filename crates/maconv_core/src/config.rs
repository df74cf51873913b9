use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which input schema dialect the converter expects.
///
/// Legacy inputs carry the identifier in the content (with the Steam64
/// vendor prefix still attached); extended inputs are named by their
/// identifier and feed the companion manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConvertMode {
    Legacy,
    #[default]
    Extended,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub convert: ConvertSettings,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConvertSettings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub mode: ConvertMode,
    /// The companion application's manifest; read-only input.
    pub manifest_path: PathBuf,
    pub write_manifest: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            convert: ConvertSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("to-convert"),
            output_dir: PathBuf::from("converted"),
            mode: ConvertMode::default(),
            manifest_path: PathBuf::from("manifest.json"),
            write_manifest: true,
        }
    }
}
