//! Aggregates module
//!
//! Aggregate roots with encapsulated business logic.

pub mod account;
pub mod form;
pub mod project;
pub mod user;

pub use account::*;
pub use form::*;
pub use project::*;
pub use user::*;
