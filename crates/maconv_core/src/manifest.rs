//! The companion application's account manifest.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::steam_id;

/// One known account in the companion manifest. `encryption` is carried
/// verbatim and never recomputed by conversion; entries collected during
/// a run always leave it null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub filename: String,
    #[serde(default, deserialize_with = "flexible_steam_id")]
    pub steam_id: Option<u64>,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub encryption: Option<Value>,
}

impl ManifestEntry {
    /// Re-derive a missing identifier from the entry's filename when the
    /// stem encodes one.
    pub fn normalize_steam_id(&mut self) {
        if self.steam_id.is_none() {
            self.steam_id =
                steam_id::filename_stem(&self.filename).and_then(steam_id::normalize_opaque);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default = "default_version", deserialize_with = "flexible_version")]
    pub version: i64,
    #[serde(default)]
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn normalize(&mut self) {
        for entry in &mut self.entries {
            entry.normalize_steam_id();
        }
    }

    /// Append collected entries whose identifier is non-null and not
    /// already present. Existing entries are never overwritten or
    /// reordered. Returns the number of entries appended.
    pub fn merge(&mut self, collected: Vec<ManifestEntry>) -> usize {
        let mut present: HashSet<u64> = self.entries.iter().filter_map(|e| e.steam_id).collect();

        let before = self.entries.len();
        for entry in collected {
            let Some(id) = entry.steam_id else { continue };
            if present.insert(id) {
                self.entries.push(entry);
            }
        }
        self.entries.len() - before
    }
}

fn default_version() -> i64 {
    1
}

/// Accept an integer version, coerce other numerics, and fall back to 1
/// for anything non-numeric.
fn flexible_version<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .unwrap_or(1))
}

/// Existing manifests carry the identifier as a number, a digit string,
/// or null; canonicalize to a number, nulling anything non-numeric.
fn flexible_steam_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => steam_id::normalize_opaque(&s),
        _ => None,
    })
}
