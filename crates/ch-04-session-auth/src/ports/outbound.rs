//! Outbound ports for session authentication.

pub use shared_types::{FixedTimeSource, SystemTimeSource, TimeSource};
