//! # Client Configuration
//!
//! Everything a client needs, loadable from JSON. Unknown fields are
//! rejected; missing ones take their defaults.
//!
//! ## Security Requirements
//!
//! - `secret` and both master key fields are redacted from `Debug` output
//! - `key` and `secret` MUST be non-empty

use crate::events::MAX_EVENT_PAYLOAD_SIZE;
use ch_01_request_signing::HostConfig;
use serde::{Deserialize, Serialize};
use shared_types::{ConfigurationError, Credential, ParseError};
use std::fmt;

/// Per-app client configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Numeric app id, used to build REST paths
    pub app_id: String,
    /// Public app key
    pub key: String,
    /// App signing secret
    pub secret: String,
    /// Explicit API host, overrides `cluster`
    pub host: Option<String>,
    /// Cluster name, e.g. `eu`
    pub cluster: Option<String>,
    /// Use `https`
    pub secure: bool,
    /// Raw 32-byte master key
    pub encryption_master_key: Option<String>,
    /// Base64 master key; mutually exclusive with `encryption_master_key`
    pub encryption_master_key_base64: Option<String>,
    /// Event payload limit in KiB; `None` or `0` keeps the API default
    pub max_event_payload_kb: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            key: String::new(),
            secret: String::new(),
            host: None,
            cluster: None,
            secure: true,
            encryption_master_key: None,
            encryption_master_key_base64: None,
            max_event_payload_kb: None,
        }
    }
}

impl ClientConfig {
    /// Config with credentials and defaults for everything else.
    pub fn new(app_id: impl Into<String>, key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            key: key.into(),
            secret: secret.into(),
            ..Self::default()
        }
    }

    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(|e| ParseError::Json(e.to_string()))
    }

    /// Check credentials are present. Master key problems are not checked here.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.key.is_empty() {
            return Err(ConfigurationError::Invalid("key must not be empty".to_string()));
        }
        if self.secret.is_empty() {
            return Err(ConfigurationError::Invalid("secret must not be empty".to_string()));
        }
        Ok(())
    }

    /// Signing credential.
    pub fn credential(&self) -> Credential {
        Credential::new(&self.key, &self.secret)
    }

    /// Largest event `data` accepted, in bytes.
    pub fn max_event_payload_size(&self) -> usize {
        match self.max_event_payload_kb {
            Some(kb) if kb > 0 => kb.saturating_mul(1024),
            _ => MAX_EVENT_PAYLOAD_SIZE,
        }
    }

    /// Host settings for the request signer.
    pub fn host_config(&self) -> HostConfig {
        HostConfig {
            host: self.host.clone(),
            cluster: self.cluster.clone(),
            secure: self.secure,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("ClientConfig")
            .field("app_id", &self.app_id)
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("host", &self.host)
            .field("cluster", &self.cluster)
            .field("secure", &self.secure)
            .field("encryption_master_key", &redact(&self.encryption_master_key))
            .field(
                "encryption_master_key_base64",
                &redact(&self.encryption_master_key_base64),
            )
            .field("max_event_payload_kb", &self.max_event_payload_kb)
            .finish()
    }
}
