//! # Encrypted Event Decryption
//!
//! Rewrites the `data` of every event on a `private-encrypted-` channel with
//! its plaintext. Any failure discards the whole payload; callers never see
//! a half-decrypted webhook.

use shared_crypto::decrypt;
use shared_types::{is_encrypted_channel, ChannelsResult, MasterKeySlot, ParseError, WebhookPayload};

/// Replace encrypted event data with plaintext. The master key is only
/// required when an encrypted event actually carries data.
pub fn decrypt_events(
    mut payload: WebhookPayload,
    master_key: &MasterKeySlot,
) -> ChannelsResult<WebhookPayload> {
    for event in payload
        .events
        .iter_mut()
        .filter(|event| is_encrypted_channel(&event.channel))
    {
        let Some(envelope) = event.data.as_deref() else {
            continue;
        };

        let key = master_key.require()?;
        let plaintext = decrypt(&event.channel, envelope, key)?;
        let plaintext = String::from_utf8(plaintext)
            .map_err(|_| ParseError::Envelope("decrypted data is not valid UTF-8".to_string()))?;
        event.data = Some(plaintext);
    }

    Ok(payload)
}
