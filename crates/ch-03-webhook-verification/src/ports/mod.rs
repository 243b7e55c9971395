//! # Ports Layer
//!
//! - **Inbound (Driving)**: `WebhookVerificationApi`

pub mod inbound;
