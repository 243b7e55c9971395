//! # Webhook Payload
//!
//! Parsed form of an authenticated webhook body.

use crate::errors::{ChannelsError, ParseError};
use serde::{Deserialize, Serialize};

/// Header carrying the sending app key (may repeat).
pub const WEBHOOK_KEY_HEADER: &str = "X-Pusher-Key";

/// Header carrying the hex HMAC of the raw body.
pub const WEBHOOK_SIGNATURE_HEADER: &str = "X-Pusher-Signature";

/// A webhook as delivered by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookPayload {
    /// Delivery timestamp in milliseconds
    pub time_ms: i64,
    /// Events in delivery order
    pub events: Vec<WebhookEvent>,
}

impl WebhookPayload {
    /// Decode a webhook JSON body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ChannelsError> {
        serde_json::from_slice(body).map_err(|e| ParseError::WebhookBody(e.to_string()).into())
    }
}

/// One lifecycle or client event inside a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookEvent {
    /// Event type, e.g. `channel_occupied` or `client_event`
    pub name: String,
    /// Channel the event happened on
    pub channel: String,
    /// Client event name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Client event data; an encrypted envelope on `private-encrypted-` channels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Sending socket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_id: Option<String>,
    /// Member that joined or left a presence channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
