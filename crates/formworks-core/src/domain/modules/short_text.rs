//! Short text module
//!
//! Single-line text input with width and validation-rule settings.

use super::kind::ModuleKind;
use super::schema::{FieldBag, FieldKind, FieldSpec, FieldValue, ModuleSchema};

/// Wire schema for short-text properties, in declaration order.
pub static SCHEMA: ModuleSchema = ModuleSchema {
    kind: ModuleKind::ShortText,
    fields: &[
        FieldSpec::new("label", FieldKind::Text),
        FieldSpec::new("sublabel", FieldKind::Text),
        FieldSpec::new("tooltip", FieldKind::Text),
        FieldSpec::new("required", FieldKind::Flag),
        FieldSpec::new("placeholder", FieldKind::Text),
        FieldSpec::new("suffix", FieldKind::Text),
        FieldSpec::new("width_type", FieldKind::Flag),
        FieldSpec::new("width", FieldKind::Integer),
        FieldSpec::new("validation", FieldKind::Text),
    ],
};

/// Short text module properties.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortTextProperties {
    pub label: String,
    pub sublabel: String,
    pub tooltip: String,
    pub required: bool,
    pub placeholder: String,
    pub suffix: String,
    pub width_type: bool,
    pub width: i64,
    pub validation: String,
}

impl ShortTextProperties {
    pub(crate) fn from_bag(bag: &mut FieldBag) -> Option<Self> {
        Some(Self {
            label: bag.take_text("label")?,
            sublabel: bag.take_text("sublabel")?,
            tooltip: bag.take_text("tooltip")?,
            required: bag.take_flag("required")?,
            placeholder: bag.take_text("placeholder")?,
            suffix: bag.take_text("suffix")?,
            width_type: bag.take_flag("width_type")?,
            width: bag.take_integer("width")?,
            validation: bag.take_text("validation")?,
        })
    }

    pub(crate) fn to_bag(&self) -> FieldBag {
        let mut bag = FieldBag::new();
        bag.insert("label", FieldValue::Text(self.label.clone()));
        bag.insert("sublabel", FieldValue::Text(self.sublabel.clone()));
        bag.insert("tooltip", FieldValue::Text(self.tooltip.clone()));
        bag.insert("required", FieldValue::Flag(self.required));
        bag.insert("placeholder", FieldValue::Text(self.placeholder.clone()));
        bag.insert("suffix", FieldValue::Text(self.suffix.clone()));
        bag.insert("width_type", FieldValue::Flag(self.width_type));
        bag.insert("width", FieldValue::Integer(self.width));
        bag.insert("validation", FieldValue::Text(self.validation.clone()));
        bag
    }
}
