//! # Shared Types Crate
//!
//! Domain entities, validation patterns and the error taxonomy used by every
//! Channels subsystem crate.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Validate at the edge**: `ChannelName` and `SocketId` can only be built
//!   from input that passed the protocol patterns, so signing code never sees
//!   an unvalidated value.
//! - **No secrets in errors**: error messages name the failing field, never
//!   its secret content.

pub mod clock;
pub mod entities;
pub mod errors;
pub mod master_key;
pub mod validation;
pub mod webhook;

pub use clock::{FixedTimeSource, SystemTimeSource, TimeSource};
pub use entities::*;
pub use errors::*;
pub use master_key::MasterKeySlot;
pub use validation::*;
pub use webhook::*;
