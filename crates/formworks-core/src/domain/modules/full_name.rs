//! Full-name module
//!
//! Composite name input with toggleable prefix, middle name, and suffix
//! parts, each carrying its own sublabel.

use super::kind::ModuleKind;
use super::schema::{FieldBag, FieldKind, FieldSpec, FieldValue, ModuleSchema};

/// Wire schema for full-name properties, in declaration order.
pub static SCHEMA: ModuleSchema = ModuleSchema {
    kind: ModuleKind::FullName,
    fields: &[
        FieldSpec::new("label", FieldKind::Text),
        FieldSpec::new("tooltip", FieldKind::Text),
        FieldSpec::new("required", FieldKind::Flag),
        FieldSpec::new("show_prefix", FieldKind::Flag),
        FieldSpec::new("show_middle_name", FieldKind::Flag),
        FieldSpec::new("show_suffix", FieldKind::Flag),
        FieldSpec::new("prefix_sublabel", FieldKind::Text),
        FieldSpec::new("first_name_sublabel", FieldKind::Text),
        FieldSpec::new("middle_name_sublabel", FieldKind::Text),
        FieldSpec::new("last_name_sublabel", FieldKind::Text),
        FieldSpec::new("suffix_sublabel", FieldKind::Text),
    ],
};

/// Full-name module properties.
#[derive(Clone, Debug, PartialEq)]
pub struct FullNameProperties {
    pub label: String,
    pub tooltip: String,
    pub required: bool,
    pub show_prefix: bool,
    pub show_middle_name: bool,
    pub show_suffix: bool,
    pub prefix_sublabel: String,
    pub first_name_sublabel: String,
    pub middle_name_sublabel: String,
    pub last_name_sublabel: String,
    pub suffix_sublabel: String,
}

impl FullNameProperties {
    pub(crate) fn from_bag(bag: &mut FieldBag) -> Option<Self> {
        Some(Self {
            label: bag.take_text("label")?,
            tooltip: bag.take_text("tooltip")?,
            required: bag.take_flag("required")?,
            show_prefix: bag.take_flag("show_prefix")?,
            show_middle_name: bag.take_flag("show_middle_name")?,
            show_suffix: bag.take_flag("show_suffix")?,
            prefix_sublabel: bag.take_text("prefix_sublabel")?,
            first_name_sublabel: bag.take_text("first_name_sublabel")?,
            middle_name_sublabel: bag.take_text("middle_name_sublabel")?,
            last_name_sublabel: bag.take_text("last_name_sublabel")?,
            suffix_sublabel: bag.take_text("suffix_sublabel")?,
        })
    }

    pub(crate) fn to_bag(&self) -> FieldBag {
        let mut bag = FieldBag::new();
        bag.insert("label", FieldValue::Text(self.label.clone()));
        bag.insert("tooltip", FieldValue::Text(self.tooltip.clone()));
        bag.insert("required", FieldValue::Flag(self.required));
        bag.insert("show_prefix", FieldValue::Flag(self.show_prefix));
        bag.insert("show_middle_name", FieldValue::Flag(self.show_middle_name));
        bag.insert("show_suffix", FieldValue::Flag(self.show_suffix));
        bag.insert(
            "prefix_sublabel",
            FieldValue::Text(self.prefix_sublabel.clone()),
        );
        bag.insert(
            "first_name_sublabel",
            FieldValue::Text(self.first_name_sublabel.clone()),
        );
        bag.insert(
            "middle_name_sublabel",
            FieldValue::Text(self.middle_name_sublabel.clone()),
        );
        bag.insert(
            "last_name_sublabel",
            FieldValue::Text(self.last_name_sublabel.clone()),
        );
        bag.insert(
            "suffix_sublabel",
            FieldValue::Text(self.suffix_sublabel.clone()),
        );
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_covers_all_fields() {
        let properties = FullNameProperties {
            label: "Full name".to_string(),
            tooltip: String::new(),
            required: true,
            show_prefix: false,
            show_middle_name: true,
            show_suffix: false,
            prefix_sublabel: "Prefix".to_string(),
            first_name_sublabel: "First".to_string(),
            middle_name_sublabel: "Middle".to_string(),
            last_name_sublabel: "Last".to_string(),
            suffix_sublabel: "Suffix".to_string(),
        };

        let bag = properties.to_bag();
        let keys: Vec<&str> = bag.iter().map(|(key, _)| *key).collect();
        let schema_keys: Vec<&str> = SCHEMA.fields.iter().map(|spec| spec.key).collect();
        assert_eq!(keys, schema_keys);
    }

    #[test]
    fn test_bag_round_trip() {
        let properties = FullNameProperties {
            label: "Your name".to_string(),
            tooltip: "As it appears on your ID".to_string(),
            required: false,
            show_prefix: true,
            show_middle_name: false,
            show_suffix: true,
            prefix_sublabel: String::new(),
            first_name_sublabel: "Given name".to_string(),
            middle_name_sublabel: String::new(),
            last_name_sublabel: "Family name".to_string(),
            suffix_sublabel: "Jr., Sr., III".to_string(),
        };

        let mut bag = properties.to_bag();
        assert_eq!(FullNameProperties::from_bag(&mut bag), Some(properties));
    }
}
