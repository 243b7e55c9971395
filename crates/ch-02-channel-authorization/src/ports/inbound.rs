//! # Inbound Ports (Driving Ports / API)

use shared_types::{AuthResponse, ChannelsResult, MemberData, UserAuthResponse};

/// Channel authorization API.
///
/// Both operations take the raw url-encoded request body so parse errors
/// surface here, not in the transport.
pub trait ChannelAuthorizationApi: Send + Sync {
    /// Authorize a subscription.
    ///
    /// `member` is signed and echoed as `channel_data` when present; presence
    /// channels pass one, private channels don't.
    ///
    /// # Errors
    /// - `Parse` for a malformed body
    /// - `Validation` for a missing or malformed `channel_name` / `socket_id`
    /// - `Configuration` for an encrypted channel without a usable master key
    fn authorize_channel(
        &self,
        body: &[u8],
        member: Option<&MemberData>,
    ) -> ChannelsResult<AuthResponse>;

    /// Sign in a user on one connection. `user_data` must be an object with a string `id`.
    fn authenticate_user(
        &self,
        body: &[u8],
        user_data: serde_json::Value,
    ) -> ChannelsResult<UserAuthResponse>;
}
