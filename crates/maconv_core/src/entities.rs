use serde::{Deserialize, Serialize};

/// Access/refresh token sub-record. Each key is emitted only when the
/// token was present and non-empty in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TokenPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl TokenPair {
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

/// A converted credential record in the schema the companion application
/// consumes. Field declaration order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub account_name: String,
    pub steam_id: Option<u64>,
    pub serial_number: String,
    pub revocation_code: String,
    pub shared_secret: String,
    pub token_gid: String,
    pub identity_secret: String,
    pub uri: String,
    pub device_id: String,
    pub secret_1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenPair>,
}
