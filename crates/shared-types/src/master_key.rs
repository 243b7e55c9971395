//! # Master Key Slot
//!
//! The outcome of resolving the configured master key, computed once when a
//! client is built. Encrypted-channel operations ask the slot for the key;
//! every other operation ignores it, so a bad key only breaks the calls that
//! need it.

use crate::errors::{ChannelsError, ConfigurationError};
use shared_crypto::{CryptoError, MasterKey};

/// Resolved master key state.
#[derive(Debug, Clone, Default)]
pub enum MasterKeySlot {
    /// No key configured.
    #[default]
    Absent,
    /// A validated 32-byte key.
    Ready(MasterKey),
    /// A key was configured but failed validation.
    Invalid(CryptoError),
}

impl MasterKeySlot {
    /// Resolve from the raw and base64 settings. Empty strings count as unset.
    pub fn resolve(raw: Option<&str>, base64: Option<&str>) -> Self {
        match MasterKey::resolve(raw, base64) {
            Ok(Some(key)) => Self::Ready(key),
            Ok(None) => Self::Absent,
            Err(err) => Self::Invalid(err),
        }
    }

    /// The key, or the configuration error explaining why there is none.
    pub fn require(&self) -> Result<&MasterKey, ChannelsError> {
        match self {
            Self::Ready(key) => Ok(key),
            Self::Absent => Err(ConfigurationError::MasterKeyRequired.into()),
            Self::Invalid(err) => Err(ConfigurationError::MasterKey(err.clone()).into()),
        }
    }

    /// Whether a usable key is present.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

impl From<MasterKey> for MasterKeySlot {
    fn from(key: MasterKey) -> Self {
        Self::Ready(key)
    }
}
