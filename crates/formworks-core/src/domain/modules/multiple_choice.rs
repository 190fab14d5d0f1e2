//! Multiple choice module
//!
//! Choice input with an ordered list of selectable options.

use super::kind::ModuleKind;
use super::schema::{FieldBag, FieldKind, FieldSpec, FieldValue, ModuleSchema};

/// Element schema for one entry of `options`.
pub static OPTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id", FieldKind::Text),
    FieldSpec::new("value", FieldKind::Text),
];

/// Wire schema for multiple-choice properties, in declaration order.
pub static SCHEMA: ModuleSchema = ModuleSchema {
    kind: ModuleKind::MultipleChoice,
    fields: &[
        FieldSpec::new("label", FieldKind::Text),
        FieldSpec::new("sublabel", FieldKind::Text),
        FieldSpec::new("tooltip", FieldKind::Text),
        FieldSpec::new("required", FieldKind::Flag),
        FieldSpec::new("placeholder", FieldKind::Text),
        FieldSpec::new("suffix", FieldKind::Text),
        FieldSpec::new("width_type", FieldKind::Flag),
        FieldSpec::new("width", FieldKind::Integer),
        FieldSpec::new("options", FieldKind::ObjectList(OPTION_FIELDS)),
    ],
};

/// One selectable option. Order within the list is render order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub id: String,
    pub value: String,
}

/// Multiple choice module properties.
#[derive(Clone, Debug, PartialEq)]
pub struct MultipleChoiceProperties {
    pub label: String,
    pub sublabel: String,
    pub tooltip: String,
    pub required: bool,
    pub placeholder: String,
    pub suffix: String,
    pub width_type: bool,
    pub width: i64,
    pub options: Vec<ChoiceOption>,
}

impl MultipleChoiceProperties {
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
            options: bag
                .take_objects("options")?
                .into_iter()
                .map(|mut option| {
                    Some(ChoiceOption {
                        id: option.take_text("id")?,
                        value: option.take_text("value")?,
                    })
                })
                .collect::<Option<Vec<_>>>()?,
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
        bag.insert(
            "options",
            FieldValue::Objects(
                self.options
                    .iter()
                    .map(|option| {
                        let mut element = FieldBag::new();
                        element.insert("id", FieldValue::Text(option.id.clone()));
                        element.insert("value", FieldValue::Text(option.value.clone()));
                        element
                    })
                    .collect(),
            ),
        );
        bag
    }
}
