//! # Token Encoding
//!
//! `base64url(header) . base64url(payload) . base64url(HMAC-SHA256)`, all
//! without padding. The header text is a constant, so its encoding never varies.

use super::claims::SessionClaims;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use shared_crypto::hmac_bytes;
use shared_types::{ChannelsError, ChannelsResult, ParseError};

/// Fixed token header.
pub const TOKEN_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Sign `claims` into a compact token.
pub fn encode_token(claims: &SessionClaims, secret: &[u8]) -> ChannelsResult<String> {
    let payload = serde_json::to_vec(claims).map_err(|e| ParseError::Json(e.to_string()))?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(TOKEN_HEADER),
        URL_SAFE_NO_PAD.encode(payload)
    );
    let signature = URL_SAFE_NO_PAD.encode(hmac_bytes(signing_input.as_bytes(), secret));

    Ok(format!("{signing_input}.{signature}"))
}

/// `{"auth": "<token>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAuthResponse {
    /// Compact token
    pub auth: String,
}

impl SessionAuthResponse {
    /// Serialize for the HTTP response body.
    pub fn to_json(&self) -> Result<String, ChannelsError> {
        serde_json::to_string(self).map_err(|e| ParseError::Json(e.to_string()).into())
    }
}
