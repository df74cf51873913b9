//! Field-aliasing rules for input credential records.
//!
//! Input files carry the same logical fields under snake_case, camelCase,
//! or nested `Session` spellings. Each output field has one [`AliasRule`]
//! listing the accepted key paths in precedence order, so the precedence
//! is data, not a conditional chain.

use serde_json::Value;

use crate::config::ConvertMode;
use crate::entities::{CredentialRecord, TokenPair};
use crate::steam_id;

/// Ordered key paths tried against the input object; the first path that
/// resolves to a non-null value wins.
#[derive(Debug, Clone, Copy)]
pub struct AliasRule {
    pub field: &'static str,
    pub paths: &'static [&'static [&'static str]],
}

pub const ACCOUNT_NAME: AliasRule = AliasRule {
    field: "account_name",
    paths: &[&["account_name"], &["accountName"]],
};

pub const SERIAL_NUMBER: AliasRule = AliasRule {
    field: "serial_number",
    paths: &[&["serial_number"], &["serialNumber"]],
};

pub const REVOCATION_CODE: AliasRule = AliasRule {
    field: "revocation_code",
    paths: &[&["revocation_code"], &["revocationCode"]],
};

pub const SHARED_SECRET: AliasRule = AliasRule {
    field: "shared_secret",
    paths: &[&["shared_secret"], &["sharedSecret"]],
};

pub const TOKEN_GID: AliasRule = AliasRule {
    field: "token_gid",
    paths: &[&["token_gid"], &["tokenGid"], &["tokenGID"]],
};

pub const IDENTITY_SECRET: AliasRule = AliasRule {
    field: "identity_secret",
    paths: &[&["identity_secret"], &["identitySecret"]],
};

pub const URI: AliasRule = AliasRule {
    field: "uri",
    paths: &[&["uri"]],
};

pub const DEVICE_ID: AliasRule = AliasRule {
    field: "device_id",
    paths: &[&["device_id"], &["deviceId"]],
};

pub const SECRET_1: AliasRule = AliasRule {
    field: "secret_1",
    paths: &[&["secret_1"], &["secret1"]],
};

pub const ACCESS_TOKEN: AliasRule = AliasRule {
    field: "access_token",
    paths: &[
        &["Session", "AccessToken"],
        &["tokens", "access_token"],
        &["access_token"],
    ],
};

pub const REFRESH_TOKEN: AliasRule = AliasRule {
    field: "refresh_token",
    paths: &[
        &["Session", "RefreshToken"],
        &["tokens", "refresh_token"],
        &["refresh_token"],
    ],
};

pub const STEAM_ID: AliasRule = AliasRule {
    field: "steam_id",
    paths: &[&["Session", "SteamID"], &["steam_id"], &["steamId"]],
};

impl AliasRule {
    /// First non-null value among the rule's paths.
    pub fn resolve<'a>(&self, input: &'a Value) -> Option<&'a Value> {
        self.paths.iter().find_map(|path| {
            let mut current = input;
            for key in *path {
                current = current.get(*key)?;
            }
            (!current.is_null()).then_some(current)
        })
    }

    /// Resolve to text. Scalar non-strings are stringified; missing and
    /// null values fall back to the empty string.
    pub fn resolve_text(&self, input: &Value) -> String {
        match self.resolve(input) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }
}

fn resolve_token(rule: &AliasRule, input: &Value) -> Option<String> {
    match rule.resolve(input) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn id_value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Derive the account identifier for a credential file.
///
/// Legacy mode prefers the content (nested session field, then snake_case,
/// then camelCase) and falls back to the filename stem, stripping the
/// Steam64 vendor prefix. Extended mode trusts the filename stem alone and
/// keeps the identifier opaque.
pub fn derive_steam_id(mode: ConvertMode, input: &Value, filename: &str) -> Option<u64> {
    match mode {
        ConvertMode::Legacy => {
            let raw = STEAM_ID
                .resolve(input)
                .and_then(id_value_to_string)
                .or_else(|| steam_id::filename_stem(filename).map(str::to_string))?;
            steam_id::normalize_legacy(&raw)
        }
        ConvertMode::Extended => {
            steam_id::filename_stem(filename).and_then(steam_id::normalize_opaque)
        }
    }
}

/// Map an input object onto the output record via the alias rules.
pub fn build_record(input: &Value, steam_id: Option<u64>) -> CredentialRecord {
    let tokens = TokenPair {
        access_token: resolve_token(&ACCESS_TOKEN, input),
        refresh_token: resolve_token(&REFRESH_TOKEN, input),
    };

    CredentialRecord {
        account_name: ACCOUNT_NAME.resolve_text(input),
        steam_id,
        serial_number: SERIAL_NUMBER.resolve_text(input),
        revocation_code: REVOCATION_CODE.resolve_text(input),
        shared_secret: SHARED_SECRET.resolve_text(input),
        token_gid: TOKEN_GID.resolve_text(input),
        identity_secret: IDENTITY_SECRET.resolve_text(input),
        uri: URI.resolve_text(input),
        device_id: DEVICE_ID.resolve_text(input),
        secret_1: SECRET_1.resolve_text(input),
        tokens: if tokens.is_empty() { None } else { Some(tokens) },
    }
}
