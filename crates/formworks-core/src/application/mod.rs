//! Application layer
//!
//! Use case services that drive the codec, aggregates and outbound ports.

pub mod commands;
pub mod dto;

pub use commands::{AccountService, FormService, ProjectService, UserService};
pub use dto::*;
