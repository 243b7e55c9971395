//! # Inbound Ports (Driving Ports / API)

use http::HeaderMap;
use shared_types::{ChannelsResult, WebhookPayload};

/// Webhook verification API.
pub trait WebhookVerificationApi: Send + Sync {
    /// Authenticate and decode a webhook from its headers and raw body.
    ///
    /// Every `X-Pusher-Key` value is a candidate; the first
    /// `X-Pusher-Signature` value is checked.
    ///
    /// # Errors
    /// - `AuthenticationFailure` for a missing signature, no matching key or a bad signature
    /// - `Parse` for a body that is not webhook JSON
    /// - `Configuration` / `Cryptographic` from the decryption pass
    fn webhook(&self, headers: &HeaderMap, body: &[u8]) -> ChannelsResult<WebhookPayload>;

    /// Same as [`webhook`](Self::webhook) with the header values already extracted.
    fn verify(
        &self,
        candidate_keys: &[&str],
        signature: &str,
        body: &[u8],
    ) -> ChannelsResult<WebhookPayload>;
}
