//! Domain Events
//!
//! Events raised by aggregates to communicate state changes.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{Email, EntityId};

/// All domain events in the form-builder bounded context
#[derive(Clone, Debug)]
pub enum DomainEvent {
    Form(FormEvent),
    Project(ProjectEvent),
    Account(AccountEvent),
    User(UserEvent),
}

/// Form-related domain events
#[derive(Clone, Debug)]
pub enum FormEvent {
    Created {
        form_id: EntityId,
        project_id: EntityId,
        name: String,
        module_count: usize,
        created_at: DateTime<Utc>,
    },

    Updated {
        form_id: EntityId,
        module_count: usize,
        updated_at: DateTime<Utc>,
    },
}

/// Project-related domain events
#[derive(Clone, Debug)]
pub enum ProjectEvent {
    Created {
        project_id: EntityId,
        account_id: EntityId,
        name: String,
        created_at: DateTime<Utc>,
    },

    Updated {
        project_id: EntityId,
        updated_at: DateTime<Utc>,
    },
}

/// Account-related domain events
#[derive(Clone, Debug)]
pub enum AccountEvent {
    Created {
        account_id: EntityId,
        name: String,
        created_at: DateTime<Utc>,
    },

    Renamed {
        account_id: EntityId,
        name: String,
    },
}

/// User-related domain events
#[derive(Clone, Debug)]
pub enum UserEvent {
    SignedUp {
        user_id: EntityId,
        account_id: EntityId,
        email: Email,
        created_at: DateTime<Utc>,
    },
}

impl DomainEvent {
    /// Get the aggregate ID this event belongs to
    pub fn aggregate_id(&self) -> &EntityId {
        match self {
            DomainEvent::Form(e) => match e {
                FormEvent::Created { form_id, .. } => form_id,
                FormEvent::Updated { form_id, .. } => form_id,
            },
            DomainEvent::Project(e) => match e {
                ProjectEvent::Created { project_id, .. } => project_id,
                ProjectEvent::Updated { project_id, .. } => project_id,
            },
            DomainEvent::Account(e) => match e {
                AccountEvent::Created { account_id, .. } => account_id,
                AccountEvent::Renamed { account_id, .. } => account_id,
            },
            DomainEvent::User(e) => match e {
                UserEvent::SignedUp { user_id, .. } => user_id,
            },
        }
    }

    /// Get event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::Form(e) => match e {
                FormEvent::Created { .. } => "form.created",
                FormEvent::Updated { .. } => "form.updated",
            },
            DomainEvent::Project(e) => match e {
                ProjectEvent::Created { .. } => "project.created",
                ProjectEvent::Updated { .. } => "project.updated",
            },
            DomainEvent::Account(e) => match e {
                AccountEvent::Created { .. } => "account.created",
                AccountEvent::Renamed { .. } => "account.renamed",
            },
            DomainEvent::User(e) => match e {
                UserEvent::SignedUp { .. } => "user.signed_up",
            },
        }
    }
}
