//! Module kinds
//!
//! The closed set of module variants and their wire discriminators.

use std::fmt;

/// Module variant discriminator.
///
/// The wire `type` tag maps one-to-one onto a kind; adding a variant means
/// adding a kind here, a schema table, and a properties record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    ShortText,
    MultipleChoice,
    Heading,
    FullName,
}

impl ModuleKind {
    /// Every supported kind, in registry order.
    pub const ALL: [ModuleKind; 4] = [
        ModuleKind::ShortText,
        ModuleKind::MultipleChoice,
        ModuleKind::Heading,
        ModuleKind::FullName,
    ];

    /// The wire discriminator for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ModuleKind::ShortText => "short-text",
            ModuleKind::MultipleChoice => "multiple-choice",
            ModuleKind::Heading => "heading",
            ModuleKind::FullName => "full-name",
        }
    }

    /// Resolve a wire discriminator to a kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
