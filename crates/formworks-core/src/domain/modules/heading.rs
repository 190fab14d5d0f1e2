//! Heading module
//!
//! Display-only heading with sizing and alignment settings.

use super::kind::ModuleKind;
use super::schema::{FieldBag, FieldKind, FieldSpec, FieldValue, ModuleSchema};

/// Wire schema for heading properties, in declaration order.
pub static SCHEMA: ModuleSchema = ModuleSchema {
    kind: ModuleKind::Heading,
    fields: &[
        FieldSpec::new("title", FieldKind::Text),
        FieldSpec::new("sublabel", FieldKind::Text),
        FieldSpec::new("size", FieldKind::Text),
        FieldSpec::new("alignment", FieldKind::Text),
        FieldSpec::new("image_alignment", FieldKind::Text),
        FieldSpec::new("vertical_alignment", FieldKind::Text),
        FieldSpec::new("image_width", FieldKind::Integer),
    ],
};

/// Heading module properties.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadingProperties {
    pub title: String,
    pub sublabel: String,
    pub size: String,
    pub alignment: String,
    pub image_alignment: String,
    pub vertical_alignment: String,
    pub image_width: i64,
}

impl HeadingProperties {
    pub(crate) fn from_bag(bag: &mut FieldBag) -> Option<Self> {
        Some(Self {
            title: bag.take_text("title")?,
            sublabel: bag.take_text("sublabel")?,
            size: bag.take_text("size")?,
            alignment: bag.take_text("alignment")?,
            image_alignment: bag.take_text("image_alignment")?,
            vertical_alignment: bag.take_text("vertical_alignment")?,
            image_width: bag.take_integer("image_width")?,
        })
    }

    pub(crate) fn to_bag(&self) -> FieldBag {
        let mut bag = FieldBag::new();
        bag.insert("title", FieldValue::Text(self.title.clone()));
        bag.insert("sublabel", FieldValue::Text(self.sublabel.clone()));
        bag.insert("size", FieldValue::Text(self.size.clone()));
        bag.insert("alignment", FieldValue::Text(self.alignment.clone()));
        bag.insert(
            "image_alignment",
            FieldValue::Text(self.image_alignment.clone()),
        );
        bag.insert(
            "vertical_alignment",
            FieldValue::Text(self.vertical_alignment.clone()),
        );
        bag.insert("image_width", FieldValue::Integer(self.image_width));
        bag
    }
}
