//! # Session Authentication Service

use crate::domain::claims::{SessionClaims, SessionRequest};
use crate::domain::token::{encode_token, SessionAuthResponse};
use crate::ports::inbound::SessionAuthApi;
use crate::ports::outbound::TimeSource;
use shared_types::{ChannelsResult, Credential};
use tracing::{debug, warn};

/// Session token issuer for one app.
pub struct SessionAuthService<T: TimeSource> {
    credential: Credential,
    clock: T,
}

impl<T: TimeSource> SessionAuthService<T> {
    /// Create a service.
    pub fn new(credential: Credential, clock: T) -> Self {
        Self { credential, clock }
    }
}

impl<T: TimeSource> SessionAuthApi for SessionAuthService<T> {
    fn authenticate_session(&self, request: &SessionRequest) -> ChannelsResult<SessionAuthResponse> {
        let claims = SessionClaims::new(self.credential.key(), request, self.clock.now())
            .inspect_err(|err| warn!(error = %err, "session authentication rejected"))?;

        let auth = encode_token(&claims, self.credential.secret())?;

        debug!(
            channels = claims.channels.len(),
            identified = claims.sub.is_some(),
            exp = claims.exp,
            "issued session token"
        );
        Ok(SessionAuthResponse { auth })
    }
}
