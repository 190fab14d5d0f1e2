//! API request and response shapes
//!
//! Forms are not mirrored here: their wire format is produced directly by
//! the module codec in formworks-core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use formworks_core::domain::aggregates::{Account, Project, User};

#[derive(Debug, Deserialize)]
pub struct UpdateProjectBody {
    pub account_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountBody {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            account_id: project.account_id().to_string(),
            name: project.name().to_string(),
            created_at: project.created_at(),
            updated_at: project.updated_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            name: account.name().to_string(),
            created_at: account.created_at(),
            updated_at: account.updated_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub account_id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            account_id: user.account_id().to_string(),
            email: user.email().as_str().to_string(),
            created_at: user.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}
