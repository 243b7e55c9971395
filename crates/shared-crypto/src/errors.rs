//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
///
/// Messages never carry key material, nonces or plaintext.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Master key decoded to the wrong number of bytes
    #[error("encryption master key must be 32 bytes, got {actual}")]
    InvalidKeyLength {
        /// Actual key length in bytes
        actual: usize,
    },

    /// Raw and base64 master key supplied together
    #[error("cannot set both a raw and a base64 encryption master key")]
    AmbiguousMasterKey,

    /// Base64 master key could not be decoded
    #[error("encryption master key is not valid base64")]
    InvalidKeyEncoding,

    /// Envelope nonce decoded to the wrong number of bytes
    #[error("Invalid nonce length: expected {expected}, got {actual}")]
    InvalidNonceLength {
        /// Expected nonce length in bytes
        expected: usize,
        /// Actual nonce length in bytes
        actual: usize,
    },

    /// Envelope is not `{"nonce":..,"ciphertext":..}` or a field is not base64
    #[error("malformed encrypted envelope: {0}")]
    MalformedEnvelope(String),

    /// Authenticated decryption failed
    #[error("failed to decrypt event, possibly wrong key")]
    DecryptionFailed,

    /// Sealing failed
    #[error("Encryption failed")]
    EncryptionFailed,

    /// The operating system RNG could not supply a nonce
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),
}
