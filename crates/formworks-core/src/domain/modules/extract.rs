//! Field extraction
//!
//! Generic routines that pull named fields out of untyped JSON objects,
//! coerce them to an expected kind, and record field errors for everything
//! absent or mismatched. Extraction never fails fast: every field of an
//! object gets inspected so one pass reports every problem.

use serde_json::{Map, Value};

use super::schema::{FieldBag, FieldKind, FieldSpec, FieldValue};
use crate::domain::validation::ValidationErrors;

/// Extract one field from `object` according to `spec`.
///
/// Returns the coerced value, or records an error under the bare field key
/// (nested object-list errors are recorded as `key[index].subkey`).
pub fn extract(
    object: &Map<String, Value>,
    spec: &FieldSpec,
    errors: &mut ValidationErrors,
) -> Option<FieldValue> {
    let value = match object.get(spec.key) {
        Some(value) => value,
        None => {
            errors.push(spec.key, "is required");
            return None;
        }
    };

    match spec.kind {
        FieldKind::Text => match value.as_str() {
            Some(text) => Some(FieldValue::Text(text.to_string())),
            None => {
                errors.push(spec.key, spec.kind.mismatch_message());
                None
            }
        },
        FieldKind::Flag => match value.as_bool() {
            Some(flag) => Some(FieldValue::Flag(flag)),
            None => {
                errors.push(spec.key, spec.kind.mismatch_message());
                None
            }
        },
        FieldKind::Integer => match coerce_integer(value) {
            Some(number) => Some(FieldValue::Integer(number)),
            None => {
                errors.push(spec.key, spec.kind.mismatch_message());
                None
            }
        },
        FieldKind::ObjectList(element_fields) => {
            extract_object_list(value, spec, element_fields, errors)
        }
    }
}

/// Run `extract` for every spec in `fields`, collecting successes into a bag.
pub fn extract_fields(
    object: &Map<String, Value>,
    fields: &[FieldSpec],
    errors: &mut ValidationErrors,
) -> FieldBag {
    let mut bag = FieldBag::new();
    for spec in fields {
        if let Some(value) = extract(object, spec, errors) {
            bag.insert(spec.key, value);
        }
    }
    bag
}

/// Look up a required object-valued field.
pub fn extract_object<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a Map<String, Value>> {
    match object.get(key) {
        None => {
            errors.push(key, "is required");
            None
        }
        Some(value) => match value.as_object() {
            Some(object) => Some(object),
            None => {
                errors.push(key, "must be an object");
                None
            }
        },
    }
}

/// Wire numbers arrive as floating point; integer fields truncate the
/// fractional part (a width of 240.0 is the pixel width 240).
fn coerce_integer(value: &Value) -> Option<i64> {
    let number = value.as_number()?;
    number
        .as_i64()
        .or_else(|| number.as_f64().map(|float| float as i64))
}

fn extract_object_list(
    value: &Value,
    spec: &FieldSpec,
    element_fields: &'static [FieldSpec],
    errors: &mut ValidationErrors,
) -> Option<FieldValue> {
    let items = match value.as_array() {
        Some(items) => items,
        None => {
            errors.push(spec.key, spec.kind.mismatch_message());
            return None;
        }
    };

    let mut objects = Vec::with_capacity(items.len());
    let mut clean = true;

    for (index, item) in items.iter().enumerate() {
        let element = match item.as_object() {
            Some(element) => element,
            None => {
                errors.push(format!("{}[{}]", spec.key, index), "must be an object");
                clean = false;
                continue;
            }
        };

        let mut element_errors = ValidationErrors::new();
        let bag = extract_fields(element, element_fields, &mut element_errors);

        if element_errors.is_empty() {
            objects.push(bag);
        } else {
            errors.merge(element_errors.prefixed(&format!("{}[{}]", spec.key, index)));
            clean = false;
        }
    }

    clean.then_some(FieldValue::Objects(objects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_extract_text() {
        let object = as_object(json!({"label": "First name"}));
        let spec = FieldSpec::new("label", FieldKind::Text);
        let mut errors = ValidationErrors::new();

        let value = extract(&object, &spec, &mut errors);
        assert_eq!(value, Some(FieldValue::Text("First name".to_string())));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_field_is_required() {
        let object = as_object(json!({}));
        let spec = FieldSpec::new("label", FieldKind::Text);
        let mut errors = ValidationErrors::new();

        assert_eq!(extract(&object, &spec, &mut errors), None);
        assert_eq!(errors.as_slice()[0].field, "label");
        assert_eq!(errors.as_slice()[0].message, "is required");
    }

    #[test]
    fn test_wrong_kind_messages() {
        let object = as_object(json!({
            "label": 4,
            "required": "yes",
            "width": "240",
        }));
        let mut errors = ValidationErrors::new();

        extract(&object, &FieldSpec::new("label", FieldKind::Text), &mut errors);
        extract(&object, &FieldSpec::new("required", FieldKind::Flag), &mut errors);
        extract(&object, &FieldSpec::new("width", FieldKind::Integer), &mut errors);

        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["must be a string", "must be a boolean", "must be an integer"]
        );
    }

    #[test]
    fn test_integer_truncates_float() {
        let object = as_object(json!({"width": 240.7}));
        let spec = FieldSpec::new("width", FieldKind::Integer);
        let mut errors = ValidationErrors::new();

        assert_eq!(
            extract(&object, &spec, &mut errors),
            Some(FieldValue::Integer(240))
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_integer_rejects_string() {
        let object = as_object(json!({"width": "240"}));
        let spec = FieldSpec::new("width", FieldKind::Integer);
        let mut errors = ValidationErrors::new();

        assert_eq!(extract(&object, &spec, &mut errors), None);
        assert_eq!(errors.as_slice()[0].message, "must be an integer");
    }

    #[test]
    fn test_object_list_indexes_element_errors() {
        const ELEMENT: &[FieldSpec] = &[
            FieldSpec::new("id", FieldKind::Text),
            FieldSpec::new("value", FieldKind::Text),
        ];
        let object = as_object(json!({
            "options": [
                {"id": "a", "value": "Apple"},
                {"id": 7, "value": "Banana"},
                {"id": "c"},
            ]
        }));
        let spec = FieldSpec::new("options", FieldKind::ObjectList(ELEMENT));
        let mut errors = ValidationErrors::new();

        assert_eq!(extract(&object, &spec, &mut errors), None);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["options[1].id", "options[2].value"]);
    }

    #[test]
    fn test_object_list_preserves_order() {
        const ELEMENT: &[FieldSpec] = &[FieldSpec::new("id", FieldKind::Text)];
        let object = as_object(json!({
            "options": [{"id": "first"}, {"id": "second"}]
        }));
        let spec = FieldSpec::new("options", FieldKind::ObjectList(ELEMENT));
        let mut errors = ValidationErrors::new();

        let Some(FieldValue::Objects(bags)) = extract(&object, &spec, &mut errors) else {
            panic!("expected object list");
        };
        let mut ids = Vec::new();
        for mut bag in bags {
            ids.push(bag.take_text("id").unwrap());
        }
        assert_eq!(ids, vec!["first", "second"]);
    }
}
