//! # Hashing
//!
//! SHA-256 for shared-secret derivation and MD5 for request-body
//! fingerprints. MD5 here is an integrity fingerprint carried in the signed
//! query string, never an authentication primitive on its own.

use md5::Md5;
use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Hash multiple inputs as one concatenated message.
pub fn sha256_concat(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update(input);
    }

    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Hex MD5 digest of a request body.
pub fn md5_hex(body: &[u8]) -> String {
    hex::encode(Md5::digest(body))
}
