//! Project Aggregate
//!
//! Container for forms, owned by an account.

use chrono::{DateTime, Utc};

use crate::domain::events::{DomainEvent, ProjectEvent};
use crate::domain::value_objects::EntityId;

/// Project aggregate root
#[derive(Clone, Debug)]
pub struct Project {
    id: EntityId,
    account_id: EntityId,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    // Domain events accumulated during operations
    events: Vec<DomainEvent>,
}

impl Project {
    /// Create a new project (factory method)
    pub fn create(account_id: EntityId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        let id = EntityId::new();
        let name = name.into();

        let mut project = Self {
            id: id.clone(),
            account_id: account_id.clone(),
            name: name.clone(),
            created_at: now,
            updated_at: now,
            events: vec![],
        };

        project.raise_event(DomainEvent::Project(ProjectEvent::Created {
            project_id: id,
            account_id,
            name,
            created_at: now,
        }));

        project
    }

    /// Rebuild a project from persisted state. Raises no events.
    pub fn rehydrate(
        id: EntityId,
        account_id: EntityId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account_id,
            name: name.into(),
            created_at,
            updated_at,
            events: vec![],
        }
    }

    // =========================================================================
    // Getters (immutable access to internal state)
    // =========================================================================

    pub fn id(&self) -> &EntityId { &self.id }
    pub fn account_id(&self) -> &EntityId { &self.account_id }
    pub fn name(&self) -> &str { &self.name }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    // =========================================================================
    // Business Operations
    // =========================================================================

    /// Apply a partial update; absent fields keep their value.
    pub fn update_details(&mut self, account_id: Option<EntityId>, name: Option<String>) {
        if let Some(account_id) = account_id {
            self.account_id = account_id;
        }
        if let Some(name) = name {
            self.name = name;
        }
        self.touch();

        self.raise_event(DomainEvent::Project(ProjectEvent::Updated {
            project_id: self.id.clone(),
            updated_at: self.updated_at,
        }));
    }

    // =========================================================================
    // Domain Events
    // =========================================================================

    /// Get and clear accumulated domain events
    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    fn raise_event(&mut self, event: DomainEvent) {
        self.events.push(event);
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
