//! # Inbound Ports (Driving Ports / API)

use crate::domain::claims::SessionRequest;
use crate::domain::token::SessionAuthResponse;
use shared_types::ChannelsResult;

/// Session authentication API.
pub trait SessionAuthApi: Send + Sync {
    /// Issue a token for `request`, stamped with the service clock.
    ///
    /// # Errors
    /// `Validation` when a channel name is malformed.
    fn authenticate_session(&self, request: &SessionRequest) -> ChannelsResult<SessionAuthResponse>;
}
