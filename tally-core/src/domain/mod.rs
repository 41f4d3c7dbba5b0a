//! Core domain types
//!
//! Value types shared between the service layer and the binary.

pub mod record;
