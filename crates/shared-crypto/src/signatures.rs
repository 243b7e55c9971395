//! # HMAC-SHA256 Signatures
//!
//! Every signed artefact of the Channels protocol (REST URLs, channel
//! authorizations, user authentications, webhooks, session tokens) is an
//! HMAC-SHA256 over a canonical string, keyed by the application secret.
//!
//! ## Security Properties
//!
//! - Verification recomputes the MAC and compares in constant time
//! - An undecodable signature is a failed verification, never an error

use crate::hashing::sha256_concat;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Raw HMAC-SHA256 output.
pub type Mac256 = [u8; 32];

/// Compute the raw HMAC-SHA256 of `message` under `secret`.
pub fn hmac_bytes(message: &[u8], secret: &[u8]) -> Mac256 {
    // HMAC accepts keys of any length, so this never fails
    let Ok(mut mac) = HmacSha256::new_from_slice(secret) else {
        unreachable!("HMAC-SHA256 accepts keys of any length");
    };
    mac.update(message);

    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}

/// Sign `message` with `secret`, returning the lowercase hex digest.
pub fn sign(message: &[u8], secret: &[u8]) -> String {
    hex::encode(hmac_bytes(message, secret))
}

/// Verify a hex signature over `message`.
///
/// Returns `false` for a wrong signature and for one that is not valid hex.
pub fn verify(signature_hex: &str, secret: &[u8], message: &[u8]) -> bool {
    let Ok(presented) = hex::decode(signature_hex) else {
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret) else {
        return false;
    };
    mac.update(message);

    // Constant-time comparison
    mac.verify_slice(&presented).is_ok()
}

/// Constant-time equality for short public strings such as app keys.
///
/// Both sides are compared as SHA-256 digests, so the timing depends on
/// neither the inputs' lengths nor where they first differ.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let a = sha256_concat(&[a.as_bytes()]);
    let b = sha256_concat(&[b.as_bytes()]);
    a[..].ct_eq(&b[..]).into()
}
