//! # Strings to Sign
//!
//! - channel: `socket_id:channel_name[:channel_data]`
//! - user: `socket_id::user::user_data`

use shared_types::{ChannelName, SocketId};

/// Canonical text for a channel subscription.
pub fn channel_string_to_sign(
    socket_id: &SocketId,
    channel: &ChannelName,
    channel_data: Option<&str>,
) -> String {
    match channel_data {
        Some(data) => format!("{socket_id}:{channel}:{data}"),
        None => format!("{socket_id}:{channel}"),
    }
}

/// Canonical text for a user sign-in.
pub fn user_string_to_sign(socket_id: &SocketId, user_data: &str) -> String {
    format!("{socket_id}::user::{user_data}")
}
