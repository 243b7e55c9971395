//! # Encryption Master Key
//!
//! The application-wide 32-byte secret from which every
//! `private-encrypted-` channel key is derived. It is validated once when a
//! client is built and immutable afterwards.

use crate::CryptoError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Required master key length in bytes.
pub const MASTER_KEY_LEN: usize = 32;

/// Validated 32-byte encryption master key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey([u8; MASTER_KEY_LEN]);

impl MasterKey {
    /// Create from raw bytes, rejecting anything but exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let key: [u8; MASTER_KEY_LEN] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength {
                actual: bytes.len(),
            })?;
        Ok(Self(key))
    }

    /// Create from a standard base64 string that decodes to 32 bytes.
    pub fn from_base64(encoded: &str) -> Result<Self, CryptoError> {
        let mut decoded = BASE64
            .decode(encoded)
            .map_err(|_| CryptoError::InvalidKeyEncoding)?;
        let key = Self::from_bytes(&decoded);
        decoded.zeroize();
        key
    }

    /// Resolve the key from its two mutually exclusive configuration forms.
    ///
    /// - both present: [`CryptoError::AmbiguousMasterKey`]
    /// - neither present: `Ok(None)`
    /// - otherwise the single form is decoded and length-checked
    pub fn resolve(raw: Option<&str>, base64: Option<&str>) -> Result<Option<Self>, CryptoError> {
        let raw = raw.filter(|value| !value.is_empty());
        let base64 = base64.filter(|value| !value.is_empty());

        match (raw, base64) {
            (Some(_), Some(_)) => Err(CryptoError::AmbiguousMasterKey),
            (Some(raw), None) => Self::from_bytes(raw.as_bytes()).map(Some),
            (None, Some(encoded)) => Self::from_base64(encoded).map(Some),
            (None, None) => Ok(None),
        }
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; MASTER_KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterKey(<redacted>)")
    }
}
