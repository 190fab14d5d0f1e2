//! FormWorks Form Builder Platform (FWFB)
//!
//! Self-hosted form builder backend following Domain-Driven Design (DDD)
//! and hexagonal architecture principles.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Module codec, aggregates, value objects, domain events
//! - **Application Layer**: Use case orchestration, DTOs
//! - **Ports Layer**: Hexagonal architecture interfaces
//! - **Infrastructure Layer**: Concrete implementations
//!
//! ## Key Aggregates
//!
//! - **Form**: Ordered, heterogeneous module list with display properties
//! - **Project**: Container for forms, owned by an account
//! - **Account**: Tenant root
//! - **User**: Credentialed principal tied to an account
//!
//! ## Features
//!
//! - Polymorphic module codec: untyped JSON in, typed variants out, and back
//! - Field-addressable validation errors accumulated across the whole form
//! - Declarative per-variant field schemas shared by decoder and encoder
//! - Domain events for integration

pub mod domain;
pub mod application;
pub mod ports;
pub mod infrastructure;

// Re-exports for convenience
pub use domain::aggregates::{Account, Form, FormButton, FormProperties, Project, User};
pub use domain::modules::{
    ChoiceOption, FormDecoder, FullNameProperties, HeadingProperties, Module, ModuleDecoder,
    ModuleKind, ModuleProperties, ModuleRegistry, MultipleChoiceProperties, ShortTextProperties,
    encode_form, encode_module, encode_modules,
};
pub use domain::validation::{DecodeError, FieldError, StructuralError, ValidationErrors};
pub use domain::value_objects::{Email, EmailError, EntityId};
pub use domain::events::{AccountEvent, DomainEvent, FormEvent, ProjectEvent, UserEvent};
pub use application::{AccountService, FormService, ProjectService, UserService};
pub use ports::inbound::{
    AccountUseCases, FormUseCases, ProjectUseCases, UseCaseError, UserUseCases,
};
pub use ports::outbound::{
    AccountRepository, EventPublisher, FormRecord, FormRepository, PasswordHasher,
    ProjectRepository, RepositoryError, UserRepository,
};
