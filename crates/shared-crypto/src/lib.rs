//! # Shared Crypto - Channels Signing and Encryption Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `signatures` | HMAC-SHA256 | Request, channel, webhook and token signing |
//! | `hashing` | SHA-256, MD5 | Shared-secret derivation, body fingerprints |
//! | `keys` | - | Validated 32-byte encryption master key |
//! | `symmetric` | XSalsa20-Poly1305 | `private-encrypted-` event payloads |
//!
//! ## Security Properties
//!
//! - **HMAC verification**: constant-time, undecodable input is a mismatch
//! - **secretbox**: 192-bit random nonce per message, tag checked first
//! - **Key material**: zeroized on drop, redacted in `Debug`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod keys;
pub mod signatures;
pub mod symmetric;

// Re-exports
pub use errors::CryptoError;
pub use hashing::md5_hex;
pub use keys::{MasterKey, MASTER_KEY_LEN};
pub use signatures::{constant_time_eq, hmac_bytes, sign, verify};
pub use symmetric::{
    decrypt, derive_shared_secret, encrypt, EncryptedEnvelope, SharedSecret, NONCE_LEN,
};
