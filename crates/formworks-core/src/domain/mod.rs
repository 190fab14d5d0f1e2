//! Domain module
//!
//! Contains all domain logic following DDD principles.

pub mod aggregates;
pub mod events;
pub mod modules;
pub mod validation;
pub mod value_objects;

pub use aggregates::*;
pub use events::*;
pub use validation::*;
pub use value_objects::*;
