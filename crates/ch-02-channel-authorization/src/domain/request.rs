//! # Authorization Requests
//!
//! Validated forms of the two bodies this subsystem accepts. Checks run in a
//! fixed order and stop at the first failure:
//!
//! 1. body parses
//! 2. `channel_name` present, non-blank, well-formed (channel requests only)
//! 3. `socket_id` present and `<digits>.<digits>`

use super::form::FormFields;
use shared_types::{ChannelName, ChannelsResult, SocketId, ValidationError};

const CHANNEL_NAME_FIELD: &str = "channel_name";
const SOCKET_ID_FIELD: &str = "socket_id";

/// A channel subscription request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    /// Channel being subscribed to
    pub channel: ChannelName,
    /// Subscribing connection
    pub socket_id: SocketId,
}

impl AuthorizationRequest {
    /// Parse and validate `channel_name=...&socket_id=...`.
    pub fn from_body(body: &[u8]) -> ChannelsResult<Self> {
        let form = FormFields::parse(body)?;

        let channel = match form.first(CHANNEL_NAME_FIELD) {
            None => return Err(ValidationError::MissingChannelName.into()),
            Some("") => return Err(ValidationError::BlankChannelName.into()),
            Some(name) => ChannelName::parse(name)?,
        };
        let socket_id = socket_id(&form)?;

        Ok(Self { channel, socket_id })
    }
}

/// A user sign-in request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAuthRequest {
    /// Connection signing in
    pub socket_id: SocketId,
}

impl UserAuthRequest {
    /// Parse and validate `socket_id=...`.
    pub fn from_body(body: &[u8]) -> ChannelsResult<Self> {
        let form = FormFields::parse(body)?;
        Ok(Self {
            socket_id: socket_id(&form)?,
        })
    }
}

fn socket_id(form: &FormFields) -> Result<SocketId, ValidationError> {
    let raw = form
        .first(SOCKET_ID_FIELD)
        .ok_or(ValidationError::MissingSocketId)?;
    SocketId::parse(raw)
}
