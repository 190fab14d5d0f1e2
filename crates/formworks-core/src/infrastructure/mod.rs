//! Infrastructure module
//!
//! Concrete adapters for the outbound ports.

pub mod persistence;
pub mod security;
