//! # Ports Layer
//!
//! - **Inbound (Driving)**: `RequestSigningApi`, used by the client facade
//! - **Outbound (Driven)**: `TimeSource`, the only dependency this subsystem has

pub mod inbound;
pub mod outbound;
