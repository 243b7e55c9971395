//! # Channel Authorization Subsystem (CH-02)
//!
//! Signs subscription requests for `private-`, `presence-` and
//! `private-encrypted-` channels, and user sign-in requests.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): strict form-body parsing, request
//!   validation, string-to-sign construction.
//! - **Ports Layer** (`ports/`): `ChannelAuthorizationApi`.
//! - **Service Layer** (`service.rs`): signs, attaches `channel_data` and the
//!   per-channel shared secret.
//!
//! ## Security Notes
//!
//! - Validation runs before any signing. A rejected request never produces a
//!   signature.
//! - Encrypted channels check for a master key before anything else is done
//!   with the request.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::form::FormFields;
pub use domain::request::{AuthorizationRequest, UserAuthRequest};
pub use domain::string_to_sign::{channel_string_to_sign, user_string_to_sign};
pub use ports::inbound::ChannelAuthorizationApi;
pub use service::ChannelAuthorizationService;
