//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identity**: `Credential`
//! - **Addressing**: `ChannelName`, `ChannelKind`, `SocketId`
//! - **Authorization input**: `MemberData`, `UserData`
//! - **Authorization output**: `AuthResponse`, `UserAuthResponse`

use crate::errors::{ChannelsError, ParseError, ValidationError};
use crate::validation::{validate_channel_name, validate_socket_id, validate_user_id};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// IDENTITY
// =============================================================================

/// App key and signing secret. The secret never crosses the wire.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    key: String,
    secret: String,
}

impl Credential {
    /// Create a credential pair.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Public app key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// HMAC signing secret.
    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// ADDRESSING
// =============================================================================

/// Prefix of channels that require a signed subscription.
pub const PRIVATE_PREFIX: &str = "private-";

/// Prefix of channels that carry member presence.
pub const PRESENCE_PREFIX: &str = "presence-";

/// Prefix of end-to-end encrypted channels.
pub const ENCRYPTED_PREFIX: &str = "private-encrypted-";

/// Whether a raw channel string names an end-to-end encrypted channel.
pub fn is_encrypted_channel(name: &str) -> bool {
    name.starts_with(ENCRYPTED_PREFIX)
}

/// Channel category implied by its name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// No prefix
    Public,
    /// `private-`
    Private,
    /// `private-encrypted-`
    PrivateEncrypted,
    /// `presence-`
    Presence,
}

/// A validated channel name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChannelName(String);

impl ChannelName {
    /// Validate and wrap a channel name.
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        validate_channel_name(name)?;
        Ok(Self(name.to_string()))
    }

    /// The channel name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Category from the name prefix.
    pub fn kind(&self) -> ChannelKind {
        if self.0.starts_with(ENCRYPTED_PREFIX) {
            ChannelKind::PrivateEncrypted
        } else if self.0.starts_with(PRIVATE_PREFIX) {
            ChannelKind::Private
        } else if self.0.starts_with(PRESENCE_PREFIX) {
            ChannelKind::Presence
        } else {
            ChannelKind::Public
        }
    }

    /// Whether payloads on this channel are end-to-end encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.kind() == ChannelKind::PrivateEncrypted
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated realtime connection id, `<int>.<int>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SocketId(String);

impl SocketId {
    /// Validate and wrap a socket id.
    pub fn parse(socket_id: &str) -> Result<Self, ValidationError> {
        validate_socket_id(socket_id)?;
        Ok(Self(socket_id.to_string()))
    }

    /// The socket id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// AUTHORIZATION INPUT
// =============================================================================

/// Presence channel member identity.
///
/// Field order is part of the signed content: `user_id` always precedes
/// `user_info`, and `user_info` keys serialize sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberData {
    /// Application user id
    pub user_id: String,
    /// Arbitrary user attributes shown to other members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<serde_json::Map<String, serde_json::Value>>,
}

impl MemberData {
    /// Member without user info.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_info: None,
        }
    }

    /// Attach a user-info attribute.
    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.user_info
            .get_or_insert_with(serde_json::Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// JSON form used both in the string-to-sign and as `channel_data`.
    pub fn to_channel_data(&self) -> Result<String, ChannelsError> {
        serde_json::to_string(self).map_err(|e| ParseError::Json(e.to_string()).into())
    }
}

/// User sign-in data. Always carries a string `id`; other attributes are free-form.
///
/// Keys serialize sorted, which keeps the signed JSON deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserData(serde_json::Map<String, serde_json::Value>);

impl UserData {
    /// Validate the `id` attribute and wrap the fields.
    pub fn parse(fields: serde_json::Map<String, serde_json::Value>) -> Result<Self, ValidationError> {
        match fields.get("id") {
            None => Err(ValidationError::MissingUserId),
            Some(serde_json::Value::String(id)) => {
                validate_user_id(id)?;
                Ok(Self(fields))
            }
            Some(_) => Err(ValidationError::UserIdNotString),
        }
    }

    /// Validate an arbitrary JSON value; anything but an object has no `id`.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        match value {
            serde_json::Value::Object(fields) => Self::parse(fields),
            _ => Err(ValidationError::MissingUserId),
        }
    }

    /// The user id.
    pub fn id(&self) -> &str {
        self.0
            .get("id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
    }

    /// JSON form used both in the string-to-sign and as `user_data`.
    pub fn to_json(&self) -> Result<String, ChannelsError> {
        serde_json::to_string(self).map_err(|e| ParseError::Json(e.to_string()).into())
    }
}

// =============================================================================
// AUTHORIZATION OUTPUT
// =============================================================================

/// Channel subscription authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// `key:signature`
    pub auth: String,
    /// Member JSON, presence channels only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_data: Option<String>,
    /// Base64 per-channel key, encrypted channels only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_secret: Option<String>,
}

impl AuthResponse {
    /// Serialize for the HTTP response body.
    pub fn to_json(&self) -> Result<String, ChannelsError> {
        serde_json::to_string(self).map_err(|e| ParseError::Json(e.to_string()).into())
    }
}

/// User sign-in authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAuthResponse {
    /// `key:signature`
    pub auth: String,
    /// User data JSON that was signed
    pub user_data: String,
}

impl UserAuthResponse {
    /// Serialize for the HTTP response body.
    pub fn to_json(&self) -> Result<String, ChannelsError> {
        serde_json::to_string(self).map_err(|e| ParseError::Json(e.to_string()).into())
    }
}
