//! # Canonical Request
//!
//! The signed form of a REST call. Parameters live in a `BTreeMap`, so the
//! string-to-sign and the transmitted query are both key-sorted.
//!
//! The two renderings differ on purpose: the HMAC covers the *unescaped*
//! `k=v&k=v` text, the URL carries the form-escaped one. The remote verifier
//! decodes the query before rebuilding the string-to-sign, so signing the
//! escaped text produces signatures it rejects.

use shared_crypto::md5_hex;
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Protocol version stamped on every signed request.
pub const AUTH_VERSION: &str = "1.0";

/// Query parameter carrying the hex HMAC; always last in the URL.
pub const AUTH_SIGNATURE_PARAM: &str = "auth_signature";

const AUTH_KEY_PARAM: &str = "auth_key";
const AUTH_TIMESTAMP_PARAM: &str = "auth_timestamp";
const AUTH_VERSION_PARAM: &str = "auth_version";
const BODY_MD5_PARAM: &str = "body_md5";

/// Parameters the signer owns. Caller-supplied values under these names are dropped.
pub fn is_reserved(name: &str) -> bool {
    matches!(
        name,
        AUTH_KEY_PARAM | AUTH_TIMESTAMP_PARAM | AUTH_VERSION_PARAM | BODY_MD5_PARAM | AUTH_SIGNATURE_PARAM
    )
}

/// An outgoing REST call before signing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignRequest {
    /// HTTP method, signed as given
    pub method: String,
    /// Absolute path, e.g. `/apps/3/events`
    pub path: String,
    /// Extra query parameters
    pub query: BTreeMap<String, String>,
    /// Request body; `Some` adds `body_md5`, even when empty
    pub body: Option<Vec<u8>>,
}

impl SignRequest {
    /// A request with no query parameters and no body.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Add an extra query parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Attach a body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// The sorted parameter set covered by the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalParams(BTreeMap<String, String>);

impl CanonicalParams {
    /// Merge the auth parameters with the caller's extras.
    pub fn new(
        key: &str,
        timestamp: u64,
        body: Option<&[u8]>,
        extra: &BTreeMap<String, String>,
    ) -> Self {
        let mut params: BTreeMap<String, String> = extra
            .iter()
            .filter(|(name, _)| !is_reserved(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        params.insert(AUTH_KEY_PARAM.to_string(), key.to_string());
        params.insert(AUTH_TIMESTAMP_PARAM.to_string(), timestamp.to_string());
        params.insert(AUTH_VERSION_PARAM.to_string(), AUTH_VERSION.to_string());
        if let Some(body) = body {
            params.insert(BODY_MD5_PARAM.to_string(), md5_hex(body));
        }

        Self(params)
    }

    /// Look up one parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// `k=v&k=v` with no escaping. This is what gets signed.
    pub fn unescaped(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Form-escaped query text for the URL.
    pub fn escaped(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

/// `method \n path \n unescaped-query`.
pub fn string_to_sign(method: &str, path: &str, params: &CanonicalParams) -> String {
    format!("{method}\n{path}\n{}", params.unescaped())
}
