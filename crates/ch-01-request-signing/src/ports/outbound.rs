//! Outbound ports for request signing.
//!
//! The clock is the only driven dependency; it is shared with the session
//! subsystem so one injected clock pins every timestamp in a test.

pub use shared_types::{FixedTimeSource, SystemTimeSource, TimeSource};
