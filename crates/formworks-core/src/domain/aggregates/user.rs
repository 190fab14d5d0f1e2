//! User Aggregate
//!
//! Credentialed principal tied to an account. Stores only the salted
//! password hash, never the password itself.

use chrono::{DateTime, Utc};

use crate::domain::events::{DomainEvent, UserEvent};
use crate::domain::value_objects::{Email, EntityId};

/// User aggregate root
#[derive(Clone, Debug)]
pub struct User {
    id: EntityId,
    account_id: EntityId,
    email: Email,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    // Domain events accumulated during operations
    events: Vec<DomainEvent>,
}

impl User {
    /// Create a new user (factory method)
    pub fn create(account_id: EntityId, email: Email, password_hash: impl Into<String>) -> Self {
        let now = Utc::now();
        let id = EntityId::new();

        let mut user = Self {
            id: id.clone(),
            account_id: account_id.clone(),
            email: email.clone(),
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
            events: vec![],
        };

        user.raise_event(DomainEvent::User(UserEvent::SignedUp {
            user_id: id,
            account_id,
            email,
            created_at: now,
        }));

        user
    }

    /// Rebuild a user from persisted state. Raises no events.
    pub fn rehydrate(
        id: EntityId,
        account_id: EntityId,
        email: Email,
        password_hash: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account_id,
            email,
            password_hash: password_hash.into(),
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
    pub fn email(&self) -> &Email { &self.email }
    pub fn password_hash(&self) -> &str { &self.password_hash }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

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
}
