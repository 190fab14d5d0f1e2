//! Ports module (Hexagonal Architecture)
//!
//! Inbound ports drive the form-builder use cases; outbound ports are the
//! storage, hashing and event seams the infrastructure layer fills in.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
