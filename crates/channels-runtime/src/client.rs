//! # Channels Client
//!
//! Facade over the four subsystem services for one app.
//!
//! ## Thread Safety
//!
//! - Every field is immutable after construction
//! - The master key is resolved here, once, and shared by `Arc`
//! - `ChannelsClient` is `Send + Sync`; wrap it in `Arc` to share

use crate::config::ClientConfig;
use crate::events::prepare_event_data;
use ch_01_request_signing::{RequestSigningApi, RequestSigningService, SignRequest};
use ch_02_channel_authorization::{ChannelAuthorizationApi, ChannelAuthorizationService};
use ch_03_webhook_verification::{HeaderMap, WebhookVerificationApi, WebhookVerificationService};
use ch_04_session_auth::{SessionAuthApi, SessionAuthResponse, SessionAuthService, SessionRequest};
use shared_types::{
    AuthResponse, ChannelsResult, MasterKeySlot, MemberData, SystemTimeSource, TimeSource,
    UserAuthResponse, WebhookPayload,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Clock shared by the request signer and the session issuer.
pub type SharedClock = Arc<dyn TimeSource>;

/// Authentication core for one app.
pub struct ChannelsClient {
    app_id: String,
    master_key: Arc<MasterKeySlot>,
    max_event_payload_size: usize,
    signer: RequestSigningService<SharedClock>,
    authorizer: ChannelAuthorizationService,
    webhooks: WebhookVerificationService,
    sessions: SessionAuthService<SharedClock>,
}

impl ChannelsClient {
    /// Build a client on the system clock.
    ///
    /// # Errors
    /// `Configuration` when the key or secret is empty. A malformed master key
    /// does not fail construction; it fails each encrypted-channel call instead.
    pub fn new(config: ClientConfig) -> ChannelsResult<Self> {
        Self::with_clock(config, Arc::new(SystemTimeSource))
    }

    /// Build a client on an injected clock.
    pub fn with_clock(config: ClientConfig, clock: SharedClock) -> ChannelsResult<Self> {
        config.validate()?;

        let master_key = Arc::new(MasterKeySlot::resolve(
            config.encryption_master_key.as_deref(),
            config.encryption_master_key_base64.as_deref(),
        ));
        if let MasterKeySlot::Invalid(err) = master_key.as_ref() {
            warn!(error = %err, "encryption master key rejected; encrypted channels disabled");
        }

        let credential = config.credential();
        let hosts = config.host_config();
        info!(
            app_id = %config.app_id,
            host = %hosts.resolved_host(),
            encryption = master_key.is_ready(),
            "channels client ready"
        );

        Ok(Self {
            signer: RequestSigningService::new(credential.clone(), hosts, Arc::clone(&clock)),
            authorizer: ChannelAuthorizationService::new(credential.clone(), Arc::clone(&master_key)),
            webhooks: WebhookVerificationService::new(credential.clone(), Arc::clone(&master_key)),
            sessions: SessionAuthService::new(credential, clock),
            max_event_payload_size: config.max_event_payload_size(),
            app_id: config.app_id,
            master_key,
        })
    }

    /// The configured app id.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Whether encrypted-channel operations can run.
    pub fn encryption_enabled(&self) -> bool {
        self.master_key.is_ready()
    }

    /// REST path for an app resource, e.g. `events` -> `/apps/3/events`.
    pub fn app_path(&self, resource: &str) -> String {
        format!("/apps/{}/{}", self.app_id, resource.trim_start_matches('/'))
    }

    /// Signed URL for a REST call, stamped now.
    pub fn signed_url(&self, request: &SignRequest) -> ChannelsResult<String> {
        self.signer.signed_url(request)
    }

    /// Authorize a channel subscription from its raw form body.
    pub fn authorize_channel(
        &self,
        body: &[u8],
        member: Option<&MemberData>,
    ) -> ChannelsResult<AuthResponse> {
        self.authorizer.authorize_channel(body, member)
    }

    /// Authenticate a user sign-in from its raw form body.
    pub fn authenticate_user(
        &self,
        body: &[u8],
        user_data: serde_json::Value,
    ) -> ChannelsResult<UserAuthResponse> {
        self.authorizer.authenticate_user(body, user_data)
    }

    /// Verify and decode a webhook.
    pub fn webhook(&self, headers: &HeaderMap, body: &[u8]) -> ChannelsResult<WebhookPayload> {
        self.webhooks.webhook(headers, body)
    }

    /// Verify and decode a webhook from pre-extracted header values.
    pub fn verify_webhook(
        &self,
        candidate_keys: &[&str],
        signature: &str,
        body: &[u8],
    ) -> ChannelsResult<WebhookPayload> {
        self.webhooks.verify(candidate_keys, signature, body)
    }

    /// Issue a session token.
    pub fn authenticate_session(&self, request: &SessionRequest) -> ChannelsResult<SessionAuthResponse> {
        self.sessions.authenticate_session(request)
    }

    /// Event `data` for `channel`, sealed when the channel is encrypted.
    ///
    /// The result must fit the configured payload limit.
    pub fn encrypt_event_data(&self, channel: &str, data: &str) -> ChannelsResult<String> {
        prepare_event_data(channel, data, &self.master_key, self.max_event_payload_size)
    }
}
