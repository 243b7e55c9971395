//! # Inbound Ports (Driving Ports / API)

use crate::domain::canonical::SignRequest;
use shared_types::ChannelsResult;

/// Request signing API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait RequestSigningApi: Send + Sync {
    /// Sign `request` at the current time and return the full URL.
    fn signed_url(&self, request: &SignRequest) -> ChannelsResult<String>;

    /// Sign `request` with an explicit `auth_timestamp` (seconds).
    ///
    /// # Errors
    /// `UrlConstruction` when the host or path cannot form a URL.
    fn signed_url_at(&self, request: &SignRequest, timestamp: u64) -> ChannelsResult<String>;
}
