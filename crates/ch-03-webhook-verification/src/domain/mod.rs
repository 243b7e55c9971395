//! # Domain Layer

pub mod decrypt;
