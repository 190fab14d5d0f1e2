//! In-memory repository implementations for testing

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;

use crate::domain::aggregates::{Account, Project, User};
use crate::domain::value_objects::{Email, EntityId};
use crate::domain::DomainEvent;
use crate::ports::outbound::{
    AccountRepository, EventPublisher, FormRecord, FormRepository, ProjectRepository,
    RepositoryError, UserRepository,
};

/// In-memory form repository (for testing)
#[derive(Default)]
pub struct InMemoryFormRepository {
    forms: RwLock<HashMap<String, FormRecord>>,
}

impl InMemoryFormRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FormRepository for InMemoryFormRepository {
    async fn create(&self, record: &FormRecord) -> Result<(), RepositoryError> {
        let mut forms = self.forms.write().unwrap();
        if forms.contains_key(&record.id) {
            return Err(RepositoryError::DuplicateKey(record.id.clone()));
        }
        forms.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<FormRecord>, RepositoryError> {
        let forms = self.forms.read().unwrap();
        Ok(forms.get(id.as_str()).cloned())
    }

    async fn update_by_id(&self, record: &FormRecord) -> Result<(), RepositoryError> {
        let mut forms = self.forms.write().unwrap();
        match forms.get_mut(&record.id) {
            Some(stored) => {
                *stored = record.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}

/// In-memory project repository (for testing)
#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<HashMap<String, Project>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Project>, RepositoryError> {
        let projects = self.projects.read().unwrap();
        Ok(projects.get(id.as_str()).cloned())
    }

    async fn save(&self, project: &Project) -> Result<(), RepositoryError> {
        let mut projects = self.projects.write().unwrap();
        projects.insert(project.id().to_string(), project.clone());
        Ok(())
    }
}

/// In-memory account repository (for testing)
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.accounts.read().unwrap();
        Ok(accounts.get(id.as_str()).cloned())
    }

    async fn save(&self, account: &Account) -> Result<(), RepositoryError> {
        let mut accounts = self.accounts.write().unwrap();
        accounts.insert(account.id().to_string(), account.clone());
        Ok(())
    }
}

/// In-memory user repository (for testing)
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().unwrap();
        Ok(users.get(id.as_str()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.email() == email).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write().unwrap();
        users.insert(user.id().to_string(), user.clone());
        Ok(())
    }
}

/// No-op event publisher for testing
#[derive(Default)]
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _events: Vec<DomainEvent>) -> Result<(), RepositoryError> {
        // No-op for testing
        Ok(())
    }
}

/// Event publisher that emits one log line per event
#[derive(Default)]
pub struct TracingEventPublisher;

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, events: Vec<DomainEvent>) -> Result<(), RepositoryError> {
        for event in &events {
            tracing::info!("Event {}: {}", event.event_type(), event.aggregate_id());
        }
        Ok(())
    }
}
