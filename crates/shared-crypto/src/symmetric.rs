//! # End-to-End Channel Encryption
//!
//! Event payloads on `private-encrypted-` channels are sealed with
//! XSalsa20-Poly1305 (NaCl `secretbox`) under a per-channel key.
//!
//! ```text
//! channel name ++ master key
//!        │
//!        ▼
//!     SHA-256 → shared secret (per channel)
//!        │
//!        ▼
//! secretbox(nonce = 24 random bytes) → {"nonce": b64, "ciphertext": b64}
//! ```
//!
//! ## Security Properties
//!
//! - Fresh nonce from the OS RNG for every seal; RNG failure is an error
//! - Poly1305 tag checked before any plaintext is released
//! - One generic error for every authentication failure

use crate::{hashing, CryptoError, MasterKey};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crypto_secretbox::aead::generic_array::GenericArray;
use crypto_secretbox::aead::{Aead, KeyInit};
use crypto_secretbox::XSalsa20Poly1305;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// XSalsa20 nonce length in bytes.
pub const NONCE_LEN: usize = 24;

/// Poly1305 tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Per-channel symmetric key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; 32]);

impl SharedSecret {
    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Standard base64 form, as sent to subscribing clients.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }
}

/// Derive the shared secret for `channel`.
///
/// `SHA256(utf8(channel) ++ key_material)`, plain concatenation. Any
/// implementation concatenating in the same order reproduces it.
pub fn derive_shared_secret(channel: &str, key_material: &[u8]) -> SharedSecret {
    SharedSecret(hashing::sha256_concat(&[channel.as_bytes(), key_material]))
}

/// Wire form of an encrypted event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedEnvelope {
    /// Base64 of the 24-byte nonce
    pub nonce: String,
    /// Base64 of tag ++ ciphertext
    pub ciphertext: String,
}

impl EncryptedEnvelope {
    /// Serialize as `{"nonce":...,"ciphertext":...}`.
    pub fn to_json(&self) -> Result<String, CryptoError> {
        serde_json::to_string(self).map_err(|_| CryptoError::EncryptionFailed)
    }

    /// Parse the JSON envelope.
    pub fn from_json(data: &str) -> Result<Self, CryptoError> {
        serde_json::from_str(data).map_err(|e| CryptoError::MalformedEnvelope(e.to_string()))
    }
}

/// Draw a nonce from the operating system RNG.
pub fn generate_nonce() -> Result<[u8; NONCE_LEN], CryptoError> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| CryptoError::EntropyUnavailable(e.to_string()))?;
    Ok(nonce)
}

/// Seal `plaintext` under `secret` with the given nonce.
pub fn seal(
    secret: &SharedSecret,
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<EncryptedEnvelope, CryptoError> {
    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(secret.as_bytes()));

    let sealed = cipher
        .encrypt(GenericArray::from_slice(nonce), plaintext)
        .map_err(|_| CryptoError::EncryptionFailed)?;

    Ok(EncryptedEnvelope {
        nonce: BASE64.encode(nonce),
        ciphertext: BASE64.encode(sealed),
    })
}

/// Open an envelope under `secret`.
///
/// # Errors
///
/// - `MalformedEnvelope`: a field is not base64
/// - `InvalidNonceLength`: the nonce is not 24 bytes
/// - `DecryptionFailed`: wrong key, tampered nonce or tampered ciphertext
pub fn open(secret: &SharedSecret, envelope: &EncryptedEnvelope) -> Result<Vec<u8>, CryptoError> {
    let nonce = BASE64
        .decode(&envelope.nonce)
        .map_err(|e| CryptoError::MalformedEnvelope(format!("nonce: {e}")))?;
    let sealed = BASE64
        .decode(&envelope.ciphertext)
        .map_err(|e| CryptoError::MalformedEnvelope(format!("ciphertext: {e}")))?;

    if nonce.len() != NONCE_LEN {
        return Err(CryptoError::InvalidNonceLength {
            expected: NONCE_LEN,
            actual: nonce.len(),
        });
    }

    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(secret.as_bytes()));

    cipher
        .decrypt(GenericArray::from_slice(&nonce), sealed.as_slice())
        .map_err(|_| CryptoError::DecryptionFailed)
}

/// Encrypt a payload for `channel`, returning the JSON envelope.
pub fn encrypt(channel: &str, plaintext: &[u8], master_key: &MasterKey) -> Result<String, CryptoError> {
    let secret = derive_shared_secret(channel, master_key.as_bytes());
    let nonce = generate_nonce()?;
    seal(&secret, &nonce, plaintext)?.to_json()
}

/// Decrypt a JSON envelope received on `channel`.
pub fn decrypt(channel: &str, envelope: &str, master_key: &MasterKey) -> Result<Vec<u8>, CryptoError> {
    let envelope = EncryptedEnvelope::from_json(envelope)?;
    let secret = derive_shared_secret(channel, master_key.as_bytes());
    open(&secret, &envelope)
}
