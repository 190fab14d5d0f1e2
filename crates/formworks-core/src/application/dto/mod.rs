//! Data Transfer Objects (DTOs)
//!
//! Objects for transferring data across boundaries.

use serde::{Deserialize, Serialize};

// =============================================================================
// Project Commands
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateProjectCommand {
    pub account_id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateProjectCommand {
    pub project_id: String,
    pub account_id: Option<String>,
    pub name: Option<String>,
}

// =============================================================================
// Account Commands
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateAccountCommand {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateAccountCommand {
    pub account_id: String,
    pub name: Option<String>,
}

// =============================================================================
// User Commands
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignUpCommand {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}
