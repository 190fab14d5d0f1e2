//! Account Aggregate
//!
//! Tenant root. Every project and user belongs to exactly one account.

use chrono::{DateTime, Utc};

use crate::domain::events::{AccountEvent, DomainEvent};
use crate::domain::value_objects::EntityId;

/// Account aggregate root
#[derive(Clone, Debug)]
pub struct Account {
    id: EntityId,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    // Domain events accumulated during operations
    events: Vec<DomainEvent>,
}

impl Account {
    /// Create a new account (factory method)
    pub fn create(name: impl Into<String>) -> Self {
        let now = Utc::now();
        let id = EntityId::new();
        let name = name.into();

        let mut account = Self {
            id: id.clone(),
            name: name.clone(),
            created_at: now,
            updated_at: now,
            events: vec![],
        };

        account.raise_event(DomainEvent::Account(AccountEvent::Created {
            account_id: id,
            name,
            created_at: now,
        }));

        account
    }

    /// Rebuild an account from persisted state. Raises no events.
    pub fn rehydrate(
        id: EntityId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
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
    pub fn name(&self) -> &str { &self.name }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    // =========================================================================
    // Business Operations
    // =========================================================================

    /// Rename the account.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();

        self.raise_event(DomainEvent::Account(AccountEvent::Renamed {
            account_id: self.id.clone(),
            name: self.name.clone(),
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
