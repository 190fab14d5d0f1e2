//! Email Value Object
//!
//! Normalized, validated email address. Signup identity is keyed on the
//! normalized form, so `User@Example.com` and `user@example.com` collide.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Email value object, stored lowercased and trimmed
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new validated email
    pub fn new(value: impl Into<String>) -> Result<Self, EmailError> {
        let value = value.into().trim().to_lowercase();

        if value.is_empty() {
            return Err(EmailError::Empty);
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(EmailError::InvalidFormat);
        };

        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(EmailError::InvalidFormat);
        }

        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(value))
    }

    /// Create email without validation (for rehydration from storage)
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_lowercase())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    Empty,
    InvalidFormat,
}

impl std::error::Error for EmailError {}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Email cannot be empty"),
            Self::InvalidFormat => write!(f, "Invalid email format"),
        }
    }
}
