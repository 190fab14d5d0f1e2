//! Polymorphic form modules
//!
//! A form is an ordered list of modules of differing kinds. On the wire
//! every module shares one envelope, with a `type` discriminator selecting
//! the shape of `properties`:
//!
//! ```json
//! {
//!   "id": "a9f6…",
//!   "type": "short-text",
//!   "name": "First name",
//!   "properties": { "label": "First name", "required": true, … }
//! }
//! ```
//!
//! Each kind declares its property shape once, as a [`schema::ModuleSchema`]
//! table. [`decode::ModuleDecoder`] walks the table to turn untyped JSON
//! into a typed [`Module`], accumulating field errors instead of stopping
//! at the first one; [`encode::encode_module`] walks the same table in the
//! other direction, so decoding what was encoded always gives the value
//! back unchanged.

pub mod decode;
pub mod encode;
mod extract;
pub mod full_name;
pub mod heading;
pub mod kind;
pub mod multiple_choice;
pub mod registry;
pub mod schema;
pub mod short_text;

pub use decode::{FormDecoder, ModuleDecoder};
pub use encode::{encode_form, encode_module, encode_modules};
pub use full_name::FullNameProperties;
pub use heading::HeadingProperties;
pub use kind::ModuleKind;
pub use multiple_choice::{ChoiceOption, MultipleChoiceProperties};
pub use registry::ModuleRegistry;
pub use short_text::ShortTextProperties;

use crate::domain::value_objects::EntityId;
use schema::FieldBag;

/// A typed form module: identity, display name, and kind-specific
/// properties.
#[derive(Clone, Debug, PartialEq)]
pub struct Module {
    pub id: EntityId,
    pub name: String,
    pub properties: ModuleProperties,
}

impl Module {
    /// Creates a module with a fresh identifier.
    pub fn new(name: impl Into<String>, properties: ModuleProperties) -> Self {
        Self::with_id(EntityId::new(), name, properties)
    }

    /// Creates a module keeping an existing identifier.
    pub fn with_id(id: EntityId, name: impl Into<String>, properties: ModuleProperties) -> Self {
        Self {
            id,
            name: name.into(),
            properties,
        }
    }

    pub fn kind(&self) -> ModuleKind {
        self.properties.kind()
    }

    /// The wire `type` discriminator for this module.
    pub fn type_tag(&self) -> &'static str {
        self.kind().tag()
    }
}

/// Kind-specific module properties.
#[derive(Clone, Debug, PartialEq)]
pub enum ModuleProperties {
    ShortText(ShortTextProperties),
    MultipleChoice(MultipleChoiceProperties),
    Heading(HeadingProperties),
    FullName(FullNameProperties),
}

impl ModuleProperties {
    pub fn kind(&self) -> ModuleKind {
        match self {
            ModuleProperties::ShortText(_) => ModuleKind::ShortText,
            ModuleProperties::MultipleChoice(_) => ModuleKind::MultipleChoice,
            ModuleProperties::Heading(_) => ModuleKind::Heading,
            ModuleProperties::FullName(_) => ModuleKind::FullName,
        }
    }

    /// Assemble the variant for `kind` from an extracted field bag.
    ///
    /// Returns `None` only if the bag disagrees with the variant's schema,
    /// which a schema-driven extraction cannot produce.
    pub(crate) fn from_bag(kind: ModuleKind, bag: &mut FieldBag) -> Option<Self> {
        match kind {
            ModuleKind::ShortText => {
                ShortTextProperties::from_bag(bag).map(ModuleProperties::ShortText)
            }
            ModuleKind::MultipleChoice => {
                MultipleChoiceProperties::from_bag(bag).map(ModuleProperties::MultipleChoice)
            }
            ModuleKind::Heading => {
                HeadingProperties::from_bag(bag).map(ModuleProperties::Heading)
            }
            ModuleKind::FullName => {
                FullNameProperties::from_bag(bag).map(ModuleProperties::FullName)
            }
        }
    }

    pub(crate) fn to_bag(&self) -> FieldBag {
        match self {
            ModuleProperties::ShortText(properties) => properties.to_bag(),
            ModuleProperties::MultipleChoice(properties) => properties.to_bag(),
            ModuleProperties::Heading(properties) => properties.to_bag(),
            ModuleProperties::FullName(properties) => properties.to_bag(),
        }
    }
}
