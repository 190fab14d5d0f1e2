//! Value Objects module
//!
//! Immutable, validated domain primitives.

pub mod email;
pub mod entity_id;

pub use email::{Email, EmailError};
pub use entity_id::EntityId;
