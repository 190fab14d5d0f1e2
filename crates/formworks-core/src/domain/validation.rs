//! Validation error model
//!
//! Field-addressable validation errors accumulated across a whole decode
//! pass, kept separate from structural failures that abort decoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single field-scoped validation error.
///
/// `field` is a dotted/indexed path into the submitted JSON, e.g.
/// `modules[1].properties.label` or `properties.options[2].id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of field validation errors.
///
/// Errors keep the order they were recorded in, which follows field
/// declaration order within a module and module order within a form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against a field path.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Append all errors from another collection, preserving order.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Return the same errors with every field path nested under `prefix`.
    ///
    /// `prefix` is joined with a dot: `modules[1]` + `properties.label`
    /// becomes `modules[1].properties.label`.
    pub fn prefixed(self, prefix: &str) -> Self {
        Self {
            errors: self
                .errors
                .into_iter()
                .map(|e| FieldError {
                    field: format!("{}.{}", prefix, e.field),
                    message: e.message,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }
}

impl std::error::Error for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "no validation errors");
        }
        let joined = self
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// Structural decode failure: no per-field validation can proceed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("request body must be a JSON object")]
    BodyNotAnObject,

    #[error("module must be a JSON object")]
    ModuleNotAnObject,

    #[error("module type is missing")]
    MissingType,

    #[error("module type must be a string")]
    TypeNotAString,

    #[error("unknown module type: {0}")]
    UnknownType(String),
}

/// Outcome of a failed decode: structural (fatal, generic) or field-level
/// (accumulated, enumerable per field).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Structural(#[from] StructuralError),

    #[error("{0}")]
    Validation(#[from] ValidationErrors),
}
