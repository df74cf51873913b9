//! Steam64 identifier normalization.
//!
//! Steam64 identifiers for individual accounts share a fixed 6-digit
//! account-type prefix; the companion application stores only the
//! remainder in legacy mode, and the full opaque numeric string in
//! extended mode.

/// Account-type prefix of a Steam64 identifier.
pub const VENDOR_PREFIX: &str = "765611";

/// Extension carried by per-account credential files.
pub const CREDENTIAL_FILE_SUFFIX: &str = ".maFile";

/// Filename stem of a credential file, i.e. the name with the `.maFile`
/// suffix removed. Returns `None` for an empty stem.
pub fn filename_stem(filename: &str) -> Option<&str> {
    let stem = filename
        .strip_suffix(CREDENTIAL_FILE_SUFFIX)
        .unwrap_or(filename);
    if stem.is_empty() {
        None
    } else {
        Some(stem)
    }
}

/// Legacy normalization: drop the vendor prefix when present, then
/// coerce the remainder to a number. Values that do not parse yield
/// `None` and serialize as null.
pub fn normalize_legacy(raw: &str) -> Option<u64> {
    let digits = raw.strip_prefix(VENDOR_PREFIX).unwrap_or(raw);
    digits.parse().ok()
}

/// Extended normalization: the identifier is kept whole but must be a
/// canonical non-negative integer string; anything containing a
/// non-digit character is nulled.
pub fn normalize_opaque(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
