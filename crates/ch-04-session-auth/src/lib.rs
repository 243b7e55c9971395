//! # Session Authentication Subsystem (CH-04)
//!
//! Issues compact `header.payload.signature` tokens (HS256) that grant one
//! user a set of channels for [`SESSION_TTL_SECS`] seconds.
//!
//! The payload JSON text is what gets signed, so its field order is fixed:
//! `exp`, `iat`, `iss`, then `sub` and `user_info` for identified users,
//! then `channels`.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::claims::{ChannelClaim, SessionClaims, SessionRequest, SESSION_TTL_SECS};
pub use domain::token::{encode_token, SessionAuthResponse, TOKEN_HEADER};
pub use ports::inbound::SessionAuthApi;
pub use ports::outbound::{SystemTimeSource, TimeSource};
pub use service::SessionAuthService;
