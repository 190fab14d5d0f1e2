//! Module registry
//!
//! Immutable lookup table from a type discriminator to the schema that
//! governs decoding and encoding for that module kind. Decoders borrow
//! a registry rather than consulting global state, so alternative
//! registries can be assembled for tests or partial deployments.

use super::full_name;
use super::heading;
use super::kind::ModuleKind;
use super::multiple_choice;
use super::schema::ModuleSchema;
use super::short_text;

/// Registry of module schemas, fixed at construction.
#[derive(Clone, Debug)]
pub struct ModuleRegistry {
    schemas: Vec<&'static ModuleSchema>,
}

impl ModuleRegistry {
    /// Builds a registry from an explicit set of schemas.
    pub fn new(schemas: Vec<&'static ModuleSchema>) -> Self {
        Self { schemas }
    }

    /// Builds the registry holding every supported module kind.
    pub fn standard() -> Self {
        Self::new(vec![
            &short_text::SCHEMA,
            &multiple_choice::SCHEMA,
            &heading::SCHEMA,
            &full_name::SCHEMA,
        ])
    }

    /// Resolves a type discriminator to its schema, if registered.
    pub fn lookup(&self, tag: &str) -> Option<&'static ModuleSchema> {
        self.schemas
            .iter()
            .find(|schema| schema.kind.tag() == tag)
            .copied()
    }

    /// Resolves a module kind to its schema, if registered.
    pub fn schema_for(&self, kind: ModuleKind) -> Option<&'static ModuleSchema> {
        self.schemas
            .iter()
            .find(|schema| schema.kind == kind)
            .copied()
    }

    /// Kinds held by this registry, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = ModuleKind> + '_ {
        self.schemas.iter().map(|schema| schema.kind)
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
