//! Outbound ports (Repository traits)
//!
//! Hexagonal architecture: these are the interfaces that infrastructure must implement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::aggregates::{Account, Project, User};
use crate::domain::value_objects::{Email, EntityId};

/// Stored shape of a form.
///
/// `properties`, `button`, and `modules` hold opaque JSON produced by the
/// encoder; the application layer re-hydrates them through the decoder.
#[derive(Clone, Debug)]
pub struct FormRecord {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub properties: Value,
    pub button: Value,
    pub modules: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Form repository port
#[async_trait]
pub trait FormRepository: Send + Sync {
    /// Insert a new form record
    async fn create(&self, record: &FormRecord) -> Result<(), RepositoryError>;

    /// Find form record by ID
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<FormRecord>, RepositoryError>;

    /// Replace the record stored under its ID
    async fn update_by_id(&self, record: &FormRecord) -> Result<(), RepositoryError>;
}

/// Project repository port
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Find project by ID
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Project>, RepositoryError>;

    /// Save project (insert or update)
    async fn save(&self, project: &Project) -> Result<(), RepositoryError>;
}

/// Account repository port
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Account>, RepositoryError>;

    /// Save account (insert or update)
    async fn save(&self, account: &Account) -> Result<(), RepositoryError>;
}

/// User repository port
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<User>, RepositoryError>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// Save user (insert or update)
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
}

/// Event publisher port
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish domain events
    async fn publish(&self, events: Vec<crate::domain::DomainEvent>) -> Result<(), RepositoryError>;
}

/// Password hashing port
pub trait PasswordHasher: Send + Sync {
    /// Hash a password for storage
    fn hash(&self, password: &str) -> String;

    /// Check a password against a stored hash
    fn verify(&self, password: &str, stored: &str) -> bool;
}

/// Repository error type
#[derive(Debug, Clone)]
pub enum RepositoryError {
    NotFound,
    DuplicateKey(String),
    ConnectionError(String),
    QueryError(String),
    SerializationError(String),
}

impl std::error::Error for RepositoryError {}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Entity not found"),
            Self::DuplicateKey(k) => write!(f, "Duplicate key: {}", k),
            Self::ConnectionError(e) => write!(f, "Connection error: {}", e),
            Self::QueryError(e) => write!(f, "Query error: {}", e),
            Self::SerializationError(e) => write!(f, "Serialization error: {}", e),
        }
    }
}
