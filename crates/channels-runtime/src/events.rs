//! # Event Payload Preparation
//!
//! Event data bound for a `private-encrypted-` channel is sealed into a JSON
//! envelope before it leaves the process. Data for every other channel is
//! passed through as-is. Either way the result must fit the payload limit,
//! [`MAX_EVENT_PAYLOAD_SIZE`] unless the client config overrides it.

use shared_crypto::encrypt;
use shared_types::{ChannelName, ChannelsResult, MasterKeySlot, ValidationError};

/// Default largest event payload, in bytes.
pub const MAX_EVENT_PAYLOAD_SIZE: usize = 10 * 1024;

/// Produce the `data` field for an event on `channel`, at most `max_size` bytes.
///
/// # Errors
/// - `Validation` for a malformed channel name or a result over `max_size`
/// - `Configuration` when the channel is encrypted and no usable master key exists
pub fn prepare_event_data(
    channel: &str,
    data: &str,
    master_key: &MasterKeySlot,
    max_size: usize,
) -> ChannelsResult<String> {
    let channel = ChannelName::parse(channel)?;

    let payload = if channel.is_encrypted() {
        encrypt(channel.as_str(), data.as_bytes(), master_key.require()?)?
    } else {
        data.to_string()
    };

    if payload.len() > max_size {
        return Err(ValidationError::PayloadTooLarge {
            max: max_size,
            actual: payload.len(),
        }
        .into());
    }
    Ok(payload)
}
