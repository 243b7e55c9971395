//! # Request Signing Subsystem (CH-01)
//!
//! Builds authenticated URLs for server-to-server calls to the Channels REST
//! API. Every request carries `auth_key`, `auth_timestamp`, `auth_version`,
//! an optional `body_md5` and an `auth_signature` over the canonical request.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): canonical parameter set, string-to-sign,
//!   host resolution. Pure, no clock.
//! - **Ports Layer** (`ports/`): `RequestSigningApi` inbound, `TimeSource`
//!   outbound.
//! - **Service Layer** (`service.rs`): stamps the time and assembles the URL.
//!
//! ## Security Notes
//!
//! - The app secret and the string-to-sign are never logged.
//! - `body_md5` is a transport fingerprint covered by the HMAC, not a MAC itself.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::canonical::{
    string_to_sign, CanonicalParams, SignRequest, AUTH_SIGNATURE_PARAM, AUTH_VERSION,
};
pub use domain::config::{HostConfig, DEFAULT_HOST};
pub use ports::inbound::RequestSigningApi;
pub use ports::outbound::{SystemTimeSource, TimeSource};
pub use service::RequestSigningService;
