//! # Ports Layer
//!
//! - **Inbound (Driving)**: `SessionAuthApi`
//! - **Outbound (Driven)**: `TimeSource`

pub mod inbound;
pub mod outbound;
