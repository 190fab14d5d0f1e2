//! Field schemas and extracted values
//!
//! Declarative descriptions of each variant's wire shape, plus the typed
//! values the extractor produces from them. The schema table is the single
//! source of truth for both the decode and encode paths.

use super::kind::ModuleKind;

/// Expected primitive kind of a wire field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON string.
    Text,
    /// JSON boolean.
    Flag,
    /// JSON number, fractional part truncated.
    Integer,
    /// JSON array of objects, each validated against the element schema.
    ObjectList(&'static [FieldSpec]),
}

impl FieldKind {
    /// Human-readable mismatch message for this kind.
    pub fn mismatch_message(&self) -> &'static str {
        match self {
            FieldKind::Text => "must be a string",
            FieldKind::Flag => "must be a boolean",
            FieldKind::Integer => "must be an integer",
            FieldKind::ObjectList(_) => "must be an array of objects",
        }
    }
}

/// One field of a variant's property schema. Every field is required.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(key: &'static str, kind: FieldKind) -> Self {
        Self { key, kind }
    }
}

/// The full property schema of one module variant, in wire order.
#[derive(Clone, Copy, Debug)]
pub struct ModuleSchema {
    pub kind: ModuleKind,
    pub fields: &'static [FieldSpec],
}

/// A value pulled out of an untyped object by the extractor.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Integer(i64),
    Objects(Vec<FieldBag>),
}

/// Ordered key/value collection of extracted fields.
///
/// Insertion order is preserved so encoded objects keep schema order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldBag {
    values: Vec<(&'static str, FieldValue)>,
}

impl FieldBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: FieldValue) {
        self.values.push((key, value));
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove and return the value stored under `key`.
    pub fn take(&mut self, key: &str) -> Option<FieldValue> {
        let index = self.values.iter().position(|(k, _)| *k == key)?;
        Some(self.values.remove(index).1)
    }

    pub fn take_text(&mut self, key: &str) -> Option<String> {
        match self.take(key)? {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn take_flag(&mut self, key: &str) -> Option<bool> {
        match self.take(key)? {
            FieldValue::Flag(value) => Some(value),
            _ => None,
        }
    }

    pub fn take_integer(&mut self, key: &str) -> Option<i64> {
        match self.take(key)? {
            FieldValue::Integer(value) => Some(value),
            _ => None,
        }
    }

    pub fn take_objects(&mut self, key: &str) -> Option<Vec<FieldBag>> {
        match self.take(key)? {
            FieldValue::Objects(value) => Some(value),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, FieldValue)> {
        self.values.iter()
    }
}

impl IntoIterator for FieldBag {
    type Item = (&'static str, FieldValue);
    type IntoIter = std::vec::IntoIter<(&'static str, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
