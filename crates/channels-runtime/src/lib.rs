//! # Channels Runtime
//!
//! One [`ChannelsClient`] per app. Construction validates the configuration
//! and resolves the encryption master key exactly once; afterwards the client
//! is immutable and can be shared across threads behind an `Arc`.
//!
//! ```text
//! ClientConfig ──► ChannelsClient
//!                   ├─ ch-01 RequestSigningService   (clock)
//!                   ├─ ch-02 ChannelAuthorizationService (master key)
//!                   ├─ ch-03 WebhookVerificationService  (master key)
//!                   └─ ch-04 SessionAuthService      (clock)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use channels_runtime::{ChannelsClient, ClientConfig};
//!
//! let config = ClientConfig::from_json(&std::fs::read_to_string("channels.json")?)?;
//! let client = ChannelsClient::new(config)?;
//! let response = client.authorize_channel(body, None)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod events;
pub mod telemetry;

pub use client::{ChannelsClient, SharedClock};
pub use config::ClientConfig;
pub use events::{prepare_event_data, MAX_EVENT_PAYLOAD_SIZE};
pub use telemetry::{init_tracing, TelemetryError, DEFAULT_LOG_FILTER};

// Subsystem request/response types callers need alongside the client
pub use ch_01_request_signing::{HostConfig, SignRequest};
pub use ch_03_webhook_verification::HeaderMap;
pub use ch_04_session_auth::{SessionAuthResponse, SessionRequest};
pub use shared_types::{
    AuthResponse, ChannelsError, ChannelsResult, MemberData, UserAuthResponse, WebhookEvent,
    WebhookPayload,
};
