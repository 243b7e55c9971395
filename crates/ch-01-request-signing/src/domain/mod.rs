//! # Domain Layer
//!
//! Canonical request form and host resolution. No I/O, no clock.

pub mod canonical;
pub mod config;
