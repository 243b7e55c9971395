//! # Webhook Verification Subsystem (CH-03)
//!
//! Authenticates webhooks delivered by the Channels service and decrypts the
//! data of events raised on `private-encrypted-` channels.
//!
//! ## Flow
//!
//! ```text
//! headers + raw body
//!   -> key match (constant time, any X-Pusher-Key value)
//!   -> HMAC over the exact raw bytes (X-Pusher-Signature)
//!   -> JSON decode
//!   -> decrypt every encrypted event, all or nothing
//! ```
//!
//! Key and signature mismatches produce the same error.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::decrypt::decrypt_events;
pub use http::HeaderMap;
pub use ports::inbound::WebhookVerificationApi;
pub use service::WebhookVerificationService;
