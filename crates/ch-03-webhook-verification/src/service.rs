//! # Webhook Verification Service

use crate::domain::decrypt::decrypt_events;
use crate::ports::inbound::WebhookVerificationApi;
use http::HeaderMap;
use shared_crypto::{constant_time_eq, verify};
use shared_types::{
    ChannelsError, ChannelsResult, Credential, MasterKeySlot, WebhookPayload, WEBHOOK_KEY_HEADER,
    WEBHOOK_SIGNATURE_HEADER,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Webhook verification service for one app credential.
pub struct WebhookVerificationService {
    credential: Credential,
    master_key: Arc<MasterKeySlot>,
}

impl WebhookVerificationService {
    /// Create a service.
    pub fn new(credential: Credential, master_key: Arc<MasterKeySlot>) -> Self {
        Self {
            credential,
            master_key,
        }
    }

    fn is_authentic(&self, candidate_keys: &[&str], signature: &str, body: &[u8]) -> bool {
        candidate_keys.iter().any(|candidate| {
            constant_time_eq(candidate, self.credential.key())
                && verify(signature, self.credential.secret(), body)
        })
    }
}

impl WebhookVerificationApi for WebhookVerificationService {
    fn webhook(&self, headers: &HeaderMap, body: &[u8]) -> ChannelsResult<WebhookPayload> {
        let Some(signature) = headers
            .get(WEBHOOK_SIGNATURE_HEADER)
            .and_then(|value| value.to_str().ok())
        else {
            warn!("webhook rejected: no readable signature header");
            return Err(ChannelsError::AuthenticationFailure);
        };

        // Values that are not visible ASCII cannot match an app key.
        let candidate_keys: Vec<&str> = headers
            .get_all(WEBHOOK_KEY_HEADER)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect();

        self.verify(&candidate_keys, signature, body)
    }

    fn verify(
        &self,
        candidate_keys: &[&str],
        signature: &str,
        body: &[u8],
    ) -> ChannelsResult<WebhookPayload> {
        if !self.is_authentic(candidate_keys, signature, body) {
            warn!(candidates = candidate_keys.len(), "webhook rejected");
            return Err(ChannelsError::AuthenticationFailure);
        }

        let payload = WebhookPayload::from_slice(body)?;
        let payload = decrypt_events(payload, &self.master_key).inspect_err(|err| {
            warn!(error = %err, "webhook decryption failed");
        })?;

        debug!(
            time_ms = payload.time_ms,
            events = payload.events.len(),
            "webhook verified"
        );
        Ok(payload)
    }
}
