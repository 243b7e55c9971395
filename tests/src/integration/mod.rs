//! # Integration Tests
//!
//! - `conformance`: literal vectors every implementation must reproduce
//! - `flows`: multi-step scenarios across subsystems

pub mod conformance;
pub mod flows;
