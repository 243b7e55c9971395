//! # Session Claims

use serde::Serialize;
use shared_types::{ChannelName, ValidationError};

/// Token lifetime.
pub const SESSION_TTL_SECS: u64 = 60;

/// What the caller asks a session token for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRequest {
    /// Application user id; blank means anonymous
    pub user_id: Option<String>,
    /// Attributes attached to an identified user
    pub user_info: Option<serde_json::Map<String, serde_json::Value>>,
    /// Channels granted, in order
    pub channels: Vec<String>,
}

impl SessionRequest {
    /// Anonymous session for `channels`.
    pub fn anonymous<I, S>(channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            channels: channels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Identify the session's user.
    pub fn for_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Attach user info.
    pub fn with_user_info(mut self, user_info: serde_json::Map<String, serde_json::Value>) -> Self {
        self.user_info = Some(user_info);
        self
    }
}

/// One granted channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelClaim {
    /// Channel name
    pub name: ChannelName,
}

/// Token payload. Declaration order is serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionClaims {
    /// Expiry, seconds
    pub exp: u64,
    /// Issued at, seconds
    pub iat: u64,
    /// Issuer, the app key
    pub iss: String,
    /// Subject, the user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// User attributes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info: Option<serde_json::Map<String, serde_json::Value>>,
    /// Granted channels
    pub channels: Vec<ChannelClaim>,
}

impl SessionClaims {
    /// Build claims issued at `iat`. `user_info` is dropped for anonymous sessions.
    pub fn new(issuer: &str, request: &SessionRequest, iat: u64) -> Result<Self, ValidationError> {
        let channels = request
            .channels
            .iter()
            .map(|name| ChannelName::parse(name).map(|name| ChannelClaim { name }))
            .collect::<Result<Vec<_>, _>>()?;

        let sub = request.user_id.clone().filter(|id| !id.trim().is_empty());
        let user_info = sub.as_ref().and(request.user_info.clone());

        Ok(Self {
            exp: iat.saturating_add(SESSION_TTL_SECS),
            iat,
            iss: issuer.to_string(),
            sub,
            user_info,
            channels,
        })
    }
}
