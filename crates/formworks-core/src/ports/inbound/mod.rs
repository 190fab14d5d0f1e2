//! Inbound ports (Use case traits)
//!
//! Hexagonal architecture: application service interfaces.

use async_trait::async_trait;
use serde_json::Value;

use crate::application::dto::*;
use crate::domain::aggregates::{Account, Form, Project, User};
use crate::domain::validation::{DecodeError, ValidationErrors};
use crate::domain::value_objects::EntityId;

/// Form management use cases
#[async_trait]
pub trait FormUseCases: Send + Sync {
    /// Decode, validate, and store a submitted form
    async fn create_form(&self, body: Value) -> Result<Form, UseCaseError>;

    /// Get form by ID
    async fn get_form(&self, id: &EntityId) -> Result<Option<Form>, UseCaseError>;

    /// Replace a stored form with a resubmitted body
    async fn update_form(&self, id: &EntityId, body: Value) -> Result<Form, UseCaseError>;
}

/// Project management use cases
#[async_trait]
pub trait ProjectUseCases: Send + Sync {
    /// Create a new project
    async fn create_project(&self, command: CreateProjectCommand) -> Result<Project, UseCaseError>;

    /// Get project by ID
    async fn get_project(&self, id: &EntityId) -> Result<Option<Project>, UseCaseError>;

    /// Apply a partial update to a project
    async fn update_project(&self, command: UpdateProjectCommand) -> Result<Project, UseCaseError>;
}

/// Account management use cases
#[async_trait]
pub trait AccountUseCases: Send + Sync {
    /// Create a new account
    async fn create_account(&self, command: CreateAccountCommand) -> Result<Account, UseCaseError>;

    /// Get account by ID
    async fn get_account(&self, id: &EntityId) -> Result<Option<Account>, UseCaseError>;

    /// Apply a partial update to an account
    async fn update_account(&self, command: UpdateAccountCommand) -> Result<Account, UseCaseError>;
}

/// Signup and login use cases
#[async_trait]
pub trait UserUseCases: Send + Sync {
    /// Register a new user, provisioning an account for them
    async fn sign_up(&self, command: SignUpCommand) -> Result<User, UseCaseError>;

    /// Verify credentials; failures never disclose which part was wrong
    async fn login(&self, command: LoginCommand) -> Result<User, UseCaseError>;
}

#[derive(Debug, Clone)]
pub enum UseCaseError {
    NotFound(String),
    Validation(ValidationErrors),
    Malformed(String),
    Unauthorized,
    RepositoryError(String),
}

impl std::error::Error for UseCaseError {}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(e) => write!(f, "Not found: {}", e),
            Self::Validation(e) => write!(f, "Validation failed: {}", e),
            Self::Malformed(e) => write!(f, "Malformed request: {}", e),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::RepositoryError(e) => write!(f, "Repository error: {}", e),
        }
    }
}

impl From<DecodeError> for UseCaseError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Structural(structural) => Self::Malformed(structural.to_string()),
            DecodeError::Validation(errors) => Self::Validation(errors),
        }
    }
}
