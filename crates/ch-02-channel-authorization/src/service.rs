//! # Channel Authorization Service
//!
//! Implements [`ChannelAuthorizationApi`] for one app credential.

use crate::domain::request::{AuthorizationRequest, UserAuthRequest};
use crate::domain::string_to_sign::{channel_string_to_sign, user_string_to_sign};
use crate::ports::inbound::ChannelAuthorizationApi;
use shared_crypto::{derive_shared_secret, sign};
use shared_types::{
    AuthResponse, ChannelsResult, Credential, MasterKeySlot, MemberData, UserAuthResponse, UserData,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Channel authorization service.
pub struct ChannelAuthorizationService {
    credential: Credential,
    master_key: Arc<MasterKeySlot>,
}

impl ChannelAuthorizationService {
    /// Create a service. `master_key` is shared with the other subsystems of one client.
    pub fn new(credential: Credential, master_key: Arc<MasterKeySlot>) -> Self {
        Self {
            credential,
            master_key,
        }
    }

    fn auth_token(&self, string_to_sign: &str) -> String {
        let signature = sign(string_to_sign.as_bytes(), self.credential.secret());
        format!("{}:{signature}", self.credential.key())
    }

    fn authorize(&self, body: &[u8], member: Option<&MemberData>) -> ChannelsResult<AuthResponse> {
        let request = AuthorizationRequest::from_body(body)?;

        let shared_secret = if request.channel.is_encrypted() {
            let master_key = self.master_key.require()?;
            Some(derive_shared_secret(request.channel.as_str(), master_key.as_bytes()).to_base64())
        } else {
            None
        };

        let channel_data = member.map(MemberData::to_channel_data).transpose()?;
        let auth = self.auth_token(&channel_string_to_sign(
            &request.socket_id,
            &request.channel,
            channel_data.as_deref(),
        ));

        debug!(
            channel = %request.channel,
            socket_id = %request.socket_id,
            presence = channel_data.is_some(),
            encrypted = shared_secret.is_some(),
            "authorized channel subscription"
        );

        Ok(AuthResponse {
            auth,
            channel_data,
            shared_secret,
        })
    }

    fn authenticate(&self, body: &[u8], user_data: serde_json::Value) -> ChannelsResult<UserAuthResponse> {
        let request = UserAuthRequest::from_body(body)?;
        let user = UserData::from_value(user_data)?;
        let user_data = user.to_json()?;

        let auth = self.auth_token(&user_string_to_sign(&request.socket_id, &user_data));

        debug!(socket_id = %request.socket_id, user_id = user.id(), "authenticated user");
        Ok(UserAuthResponse { auth, user_data })
    }
}

impl ChannelAuthorizationApi for ChannelAuthorizationService {
    fn authorize_channel(
        &self,
        body: &[u8],
        member: Option<&MemberData>,
    ) -> ChannelsResult<AuthResponse> {
        self.authorize(body, member).inspect_err(|err| {
            warn!(error = %err, "channel authorization rejected");
        })
    }

    fn authenticate_user(
        &self,
        body: &[u8],
        user_data: serde_json::Value,
    ) -> ChannelsResult<UserAuthResponse> {
        self.authenticate(body, user_data).inspect_err(|err| {
            warn!(error = %err, "user authentication rejected");
        })
    }
}
