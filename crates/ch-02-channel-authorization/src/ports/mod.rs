//! # Ports Layer
//!
//! - **Inbound (Driving)**: `ChannelAuthorizationApi`
//!
//! This subsystem drives nothing; the master key arrives pre-resolved.

pub mod inbound;
