//! # Domain Layer
//!
//! Pure parsing and string building. Nothing here touches a secret.

pub mod form;
pub mod request;
pub mod string_to_sign;
