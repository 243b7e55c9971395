//! # Input Validation
//!
//! Process-wide compiled patterns for channel names and socket ids. They are
//! built on first use and never mutated.

use crate::errors::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum channel name length.
pub const MAX_CHANNEL_NAME_LEN: usize = 200;

/// Maximum user id length (exclusive).
pub const MAX_USER_ID_LEN: usize = 200;

static CHANNEL_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-a-zA-Z0-9_=@,.;]+$").expect("channel name pattern is a valid regex")
});

static SOCKET_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("socket id pattern is a valid regex"));

/// Check a channel name's length and character set.
pub fn validate_channel_name(name: &str) -> Result<(), ValidationError> {
    if name.len() > MAX_CHANNEL_NAME_LEN {
        return Err(ValidationError::ChannelNameTooLong {
            max: MAX_CHANNEL_NAME_LEN,
            actual: name.len(),
        });
    }
    if !CHANNEL_NAME_PATTERN.is_match(name) {
        return Err(ValidationError::InvalidChannelName(name.to_string()));
    }
    Ok(())
}

/// Check a socket id is `<digits>.<digits>`.
pub fn validate_socket_id(socket_id: &str) -> Result<(), ValidationError> {
    if SOCKET_ID_PATTERN.is_match(socket_id) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSocketId)
    }
}

/// Check a user id is non-empty and shorter than [`MAX_USER_ID_LEN`].
pub fn validate_user_id(user_id: &str) -> Result<(), ValidationError> {
    if user_id.is_empty() || user_id.len() >= MAX_USER_ID_LEN {
        return Err(ValidationError::InvalidUserId(user_id.to_string()));
    }
    Ok(())
}
