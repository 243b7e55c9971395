//! # Channels Auth Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Fixtures shared by the criterion benches
//! │   └── fixtures.rs
//! │
//! └── integration/      # Cross-crate tests
//!     ├── conformance.rs   # Fixed wire vectors, one per signed artefact
//!     └── flows.rs         # End-to-end flows through ChannelsClient
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ch-tests
//!
//! # By category
//! cargo test -p ch-tests integration::conformance::
//! cargo test -p ch-tests integration::flows::
//!
//! # Benchmarks
//! cargo bench -p ch-tests
//! ```

pub mod integration;
