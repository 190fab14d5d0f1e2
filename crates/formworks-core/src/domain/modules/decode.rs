//! Module and form decoding
//!
//! Turns untyped JSON into typed modules and forms. Structural problems
//! (non-object module, missing or unknown `type`) abort immediately since
//! there is no schema to validate against; everything else is a field
//! error, accumulated across every field of every module so one decode
//! pass reports every problem in the submission.

use serde_json::{Map, Value};

use super::extract::{extract_fields, extract_object};
use super::registry::ModuleRegistry;
use super::schema::{FieldBag, FieldSpec};
use super::{Module, ModuleProperties};
use crate::domain::aggregates::form::{BUTTON_FIELDS, PROPERTY_FIELDS};
use crate::domain::aggregates::{Form, FormButton, FormProperties};
use crate::domain::validation::{DecodeError, StructuralError, ValidationErrors};
use crate::domain::value_objects::EntityId;

/// Decodes one module object against the registry.
#[derive(Clone, Debug)]
pub struct ModuleDecoder<'a> {
    registry: &'a ModuleRegistry,
}

impl<'a> ModuleDecoder<'a> {
    pub fn new(registry: &'a ModuleRegistry) -> Self {
        Self { registry }
    }

    /// Decode a single module.
    ///
    /// Error field paths are relative to the module object (`name`,
    /// `properties.label`, `properties.options[2].id`).
    pub fn decode(&self, value: &Value) -> Result<Module, DecodeError> {
        let object = value
            .as_object()
            .ok_or(StructuralError::ModuleNotAnObject)?;

        let tag = match object.get("type") {
            None => return Err(StructuralError::MissingType.into()),
            Some(Value::String(tag)) => tag.as_str(),
            Some(_) => return Err(StructuralError::TypeNotAString.into()),
        };
        let schema = self
            .registry
            .lookup(tag)
            .ok_or_else(|| StructuralError::UnknownType(tag.to_string()))?;

        let mut errors = ValidationErrors::new();

        let id = decode_optional_id(object, &mut errors);
        let name = decode_name(object, &mut errors);
        let properties = decode_section(
            object,
            "properties",
            schema.fields,
            |bag| ModuleProperties::from_bag(schema.kind, bag),
            &mut errors,
        );

        let (Some(id), Some(name), Some(properties)) = (id, name, properties) else {
            return Err(errors.into());
        };
        Ok(Module::with_id(id, name, properties))
    }

    /// Decode a stored module list produced by the encoder.
    ///
    /// Stored modules always carry identifiers, so this never mints any.
    pub fn decode_list(&self, values: &[Value]) -> Result<Vec<Module>, DecodeError> {
        let mut errors = ValidationErrors::new();
        let mut modules = Vec::with_capacity(values.len());

        for (index, element) in values.iter().enumerate() {
            match self.decode(element) {
                Ok(module) => modules.push(module),
                Err(DecodeError::Structural(structural)) => return Err(structural.into()),
                Err(DecodeError::Validation(module_errors)) => {
                    errors.merge(module_errors.prefixed(&format!("modules[{}]", index)));
                }
            }
        }

        if errors.is_empty() {
            Ok(modules)
        } else {
            Err(errors.into())
        }
    }
}

/// Decodes a whole form submission.
#[derive(Clone, Debug)]
pub struct FormDecoder<'a> {
    modules: ModuleDecoder<'a>,
}

impl<'a> FormDecoder<'a> {
    pub fn new(registry: &'a ModuleRegistry) -> Self {
        Self {
            modules: ModuleDecoder::new(registry),
        }
    }

    /// Decode a submitted form, minting a fresh form identifier.
    ///
    /// Used on the create path. Any `id` in the body is checked for shape
    /// but never adopted; identifiers are assigned by the server.
    pub fn decode(&self, value: &Value) -> Result<Form, DecodeError> {
        self.decode_inner(value, None)
    }

    /// Decode a submitted form that keeps a known identifier.
    ///
    /// Used on the update path, where the identifier comes from the
    /// request path rather than the body.
    pub fn decode_with_id(&self, id: EntityId, value: &Value) -> Result<Form, DecodeError> {
        self.decode_inner(value, Some(id))
    }

    /// Decode a stored module list produced by the encoder.
    pub fn decode_modules(&self, values: &[Value]) -> Result<Vec<Module>, DecodeError> {
        self.modules.decode_list(values)
    }

    /// Decode a stored form-level `properties` section.
    pub fn decode_properties(&self, value: &Value) -> Result<FormProperties, DecodeError> {
        section_from_value(value, "properties", PROPERTY_FIELDS, FormProperties::from_bag)
    }

    /// Decode a stored form-level `button` section.
    pub fn decode_button(&self, value: &Value) -> Result<FormButton, DecodeError> {
        section_from_value(value, "button", BUTTON_FIELDS, FormButton::from_bag)
    }

    fn decode_inner(&self, value: &Value, id: Option<EntityId>) -> Result<Form, DecodeError> {
        let object = value.as_object().ok_or(StructuralError::BodyNotAnObject)?;

        let mut errors = ValidationErrors::new();

        if let Some(id_value) = object.get("id") {
            if !id_value.is_string() {
                errors.push("id", "must be a string");
            }
        }

        let project_id = decode_required_text(object, "project_id", &mut errors);
        let name = decode_name(object, &mut errors);
        let properties = decode_section(
            object,
            "properties",
            PROPERTY_FIELDS,
            FormProperties::from_bag,
            &mut errors,
        );
        let button = decode_section(
            object,
            "button",
            BUTTON_FIELDS,
            FormButton::from_bag,
            &mut errors,
        );
        let modules = self.decode_modules_entry(object, &mut errors)?;

        let (Some(project_id), Some(name), Some(properties), Some(button), Some(modules)) =
            (project_id, name, properties, button, modules)
        else {
            return Err(errors.into());
        };

        // The id shape check above records an error without blocking any
        // section, so the destructuring alone does not prove a clean decode.
        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(Form::from_decoded(
            id,
            EntityId::from_string(project_id),
            name,
            properties,
            button,
            modules,
        ))
    }

    /// Decode the `modules` entry of a form body.
    ///
    /// Field errors inside a module are reported under its position
    /// (`modules[1].properties.label`); a structural error in any module
    /// aborts the whole decode.
    fn decode_modules_entry(
        &self,
        object: &Map<String, Value>,
        errors: &mut ValidationErrors,
    ) -> Result<Option<Vec<Module>>, StructuralError> {
        let list = match object.get("modules") {
            None => {
                errors.push("modules", "is required");
                return Ok(None);
            }
            Some(Value::Array(list)) => list,
            Some(_) => {
                errors.push("modules", "must be an array");
                return Ok(None);
            }
        };

        let mut modules = Vec::with_capacity(list.len());
        let mut clean = true;

        for (index, element) in list.iter().enumerate() {
            match self.modules.decode(element) {
                Ok(module) => modules.push(module),
                Err(DecodeError::Structural(structural)) => return Err(structural),
                Err(DecodeError::Validation(module_errors)) => {
                    errors.merge(module_errors.prefixed(&format!("modules[{}]", index)));
                    clean = false;
                }
            }
        }

        Ok(clean.then_some(modules))
    }
}

/// Module `id` is optional on input; one is minted when absent.
fn decode_optional_id(
    object: &Map<String, Value>,
    errors: &mut ValidationErrors,
) -> Option<EntityId> {
    match object.get("id") {
        None => Some(EntityId::new()),
        Some(Value::String(id)) => Some(EntityId::from_string(id.clone())),
        Some(_) => {
            errors.push("id", "must be a string");
            None
        }
    }
}

fn decode_required_text(
    object: &Map<String, Value>,
    key: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match object.get(key) {
        None => {
            errors.push(key, "is required");
            None
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            errors.push(key, "must be a string");
            None
        }
    }
}

fn decode_name(object: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<String> {
    let name = decode_required_text(object, "name", errors)?;
    if name.is_empty() {
        errors.push("name", "must not be empty");
        return None;
    }
    Some(name)
}

/// Extract a required object-valued section and validate it against a
/// field table, nesting field errors under the section key.
fn decode_section<T>(
    object: &Map<String, Value>,
    key: &'static str,
    fields: &[FieldSpec],
    build: impl FnOnce(&mut FieldBag) -> Option<T>,
    errors: &mut ValidationErrors,
) -> Option<T> {
    let section = extract_object(object, key, errors)?;

    let mut section_errors = ValidationErrors::new();
    let mut bag = extract_fields(section, fields, &mut section_errors);
    if !section_errors.is_empty() {
        errors.merge(section_errors.prefixed(key));
        return None;
    }
    build(&mut bag)
}

/// Validate a bare section value (as stored in persistence) against its
/// field table.
fn section_from_value<T>(
    value: &Value,
    key: &'static str,
    fields: &[FieldSpec],
    build: impl FnOnce(&mut FieldBag) -> Option<T>,
) -> Result<T, DecodeError> {
    let object = match value.as_object() {
        Some(object) => object,
        None => {
            let mut errors = ValidationErrors::new();
            errors.push(key, "must be an object");
            return Err(errors.into());
        }
    };

    let mut errors = ValidationErrors::new();
    let mut bag = extract_fields(object, fields, &mut errors);
    match build(&mut bag) {
        Some(section) if errors.is_empty() => Ok(section),
        _ => Err(errors.prefixed(key).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::modules::{ModuleKind, ShortTextProperties};
    use serde_json::json;

    fn registry() -> ModuleRegistry {
        ModuleRegistry::standard()
    }

    fn short_text_payload() -> Value {
        json!({
            "type": "short-text",
            "name": "q1",
            "properties": {
                "label": "First name",
                "sublabel": "",
                "tooltip": "",
                "required": true,
                "placeholder": "",
                "suffix": "",
                "width_type": false,
                "width": 100,
                "validation": ""
            }
        })
    }

    fn heading_payload() -> Value {
        json!({
            "type": "heading",
            "name": "header",
            "properties": {
                "title": "Welcome",
                "sublabel": "",
                "size": "large",
                "alignment": "center",
                "image_alignment": "top",
                "vertical_alignment": "middle",
                "image_width": 0
            }
        })
    }

    fn form_payload() -> Value {
        json!({
            "project_id": "project-1",
            "name": "Customer survey",
            "properties": {
                "background_color": "#ffffff",
                "font_color": "#111111"
            },
            "button": {
                "background_color": "#2266ff",
                "color": "#ffffff",
                "font_size": "16px",
                "font_family": "Inter"
            },
            "modules": [short_text_payload(), heading_payload()]
        })
    }

    fn expect_validation(result: Result<impl std::fmt::Debug, DecodeError>) -> ValidationErrors {
        match result {
            Err(DecodeError::Validation(errors)) => errors,
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_short_text_module() {
        let registry = registry();
        let decoder = ModuleDecoder::new(&registry);

        let module = decoder.decode(&short_text_payload()).unwrap();

        assert!(!module.id.as_str().is_empty());
        assert_eq!(module.name, "q1");
        assert_eq!(module.kind(), ModuleKind::ShortText);
        assert_eq!(
            module.properties,
            ModuleProperties::ShortText(ShortTextProperties {
                label: "First name".to_string(),
                sublabel: String::new(),
                tooltip: String::new(),
                required: true,
                placeholder: String::new(),
                suffix: String::new(),
                width_type: false,
                width: 100,
                validation: String::new(),
            })
        );
    }

    #[test]
    fn test_missing_required_reports_one_error() {
        let registry = registry();
        let decoder = ModuleDecoder::new(&registry);
        let mut payload = short_text_payload();
        payload["properties"]
            .as_object_mut()
            .unwrap()
            .remove("required");

        let errors = expect_validation(decoder.decode(&payload));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.as_slice()[0].field, "properties.required");
        assert_eq!(errors.as_slice()[0].message, "is required");
    }

    #[test]
    fn test_empty_properties_reports_every_field() {
        let registry = registry();
        let decoder = ModuleDecoder::new(&registry);
        let payload = json!({
            "type": "short-text",
            "name": "q1",
            "properties": {}
        });

        let errors = expect_validation(decoder.decode(&payload));

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "properties.label",
                "properties.sublabel",
                "properties.tooltip",
                "properties.required",
                "properties.placeholder",
                "properties.suffix",
                "properties.width_type",
                "properties.width",
                "properties.validation",
            ]
        );
    }

    #[test]
    fn test_unknown_type_is_structural() {
        let registry = registry();
        let decoder = ModuleDecoder::new(&registry);
        let payload = json!({"type": "date-picker", "name": "q1", "properties": {}});

        let err = decoder.decode(&payload).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Structural(StructuralError::UnknownType("date-picker".to_string()))
        );
    }

    #[test]
    fn test_type_discriminator_is_structural() {
        let registry = registry();
        let decoder = ModuleDecoder::new(&registry);

        assert_eq!(
            decoder.decode(&json!({"name": "q1"})).unwrap_err(),
            DecodeError::Structural(StructuralError::MissingType)
        );
        assert_eq!(
            decoder.decode(&json!({"type": 7, "name": "q1"})).unwrap_err(),
            DecodeError::Structural(StructuralError::TypeNotAString)
        );
        assert_eq!(
            decoder.decode(&json!("short-text")).unwrap_err(),
            DecodeError::Structural(StructuralError::ModuleNotAnObject)
        );
    }

    #[test]
    fn test_supplied_module_id_is_preserved() {
        let registry = registry();
        let decoder = ModuleDecoder::new(&registry);
        let mut payload = short_text_payload();
        payload["id"] = json!("module-42");

        let module = decoder.decode(&payload).unwrap();
        assert_eq!(module.id.as_str(), "module-42");
    }

    #[test]
    fn test_non_string_module_id_is_field_error() {
        let registry = registry();
        let decoder = ModuleDecoder::new(&registry);
        let mut payload = short_text_payload();
        payload["id"] = json!(42);

        let errors = expect_validation(decoder.decode(&payload));
        assert_eq!(errors.as_slice()[0].field, "id");
        assert_eq!(errors.as_slice()[0].message, "must be a string");
    }

    #[test]
    fn test_empty_module_name_rejected() {
        let registry = registry();
        let decoder = ModuleDecoder::new(&registry);
        let mut payload = short_text_payload();
        payload["name"] = json!("");

        let errors = expect_validation(decoder.decode(&payload));
        assert_eq!(errors.as_slice()[0].field, "name");
        assert_eq!(errors.as_slice()[0].message, "must not be empty");
    }

    #[test]
    fn test_option_errors_carry_list_position() {
        let registry = registry();
        let decoder = ModuleDecoder::new(&registry);
        let payload = json!({
            "type": "multiple-choice",
            "name": "q2",
            "properties": {
                "label": "Pick one",
                "sublabel": "",
                "tooltip": "",
                "required": true,
                "placeholder": "",
                "suffix": "",
                "width_type": false,
                "width": 100,
                "options": [
                    {"id": "a", "value": "Apple"},
                    {"id": "b"}
                ]
            }
        });

        let errors = expect_validation(decoder.decode(&payload));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.as_slice()[0].field, "properties.options[1].value");
    }

    #[test]
    fn test_decode_form() {
        let registry = registry();
        let decoder = FormDecoder::new(&registry);

        let form = decoder.decode(&form_payload()).unwrap();

        assert!(!form.id().as_str().is_empty());
        assert_eq!(form.project_id().as_str(), "project-1");
        assert_eq!(form.name(), "Customer survey");
        assert_eq!(form.properties().background_color, "#ffffff");
        assert_eq!(form.button().font_family, "Inter");
        assert_eq!(form.modules().len(), 2);
        assert_eq!(form.modules()[0].kind(), ModuleKind::ShortText);
        assert_eq!(form.modules()[1].kind(), ModuleKind::Heading);
    }

    #[test]
    fn test_decoded_modules_get_distinct_ids() {
        let registry = registry();
        let decoder = FormDecoder::new(&registry);

        let form = decoder.decode(&form_payload()).unwrap();
        assert_ne!(form.modules()[0].id, form.modules()[1].id);
    }

    #[test]
    fn test_module_error_paths_carry_position() {
        let registry = registry();
        let decoder = FormDecoder::new(&registry);
        let mut payload = form_payload();
        payload["modules"][0]["properties"]
            .as_object_mut()
            .unwrap()
            .remove("required");

        let errors = expect_validation(decoder.decode(&payload));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.as_slice()[0].field, "modules[0].properties.required");
    }

    #[test]
    fn test_errors_accumulate_across_modules_and_top_level() {
        let registry = registry();
        let decoder = FormDecoder::new(&registry);
        let mut payload = form_payload();
        payload["name"] = json!("");
        payload["modules"][0]["properties"]
            .as_object_mut()
            .unwrap()
            .remove("label");
        payload["modules"][1]["properties"]
            .as_object_mut()
            .unwrap()
            .remove("title");

        let errors = expect_validation(decoder.decode(&payload));

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "name",
                "modules[0].properties.label",
                "modules[1].properties.title",
            ]
        );
    }

    #[test]
    fn test_unknown_module_type_aborts_form() {
        let registry = registry();
        let decoder = FormDecoder::new(&registry);
        let mut payload = form_payload();
        payload["name"] = json!("");
        payload["modules"][1]["type"] = json!("date-picker");

        let err = decoder.decode(&payload).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Structural(StructuralError::UnknownType("date-picker".to_string()))
        );
    }

    #[test]
    fn test_non_object_module_element_aborts_form() {
        let registry = registry();
        let decoder = FormDecoder::new(&registry);
        let mut payload = form_payload();
        payload["modules"][1] = json!("heading");

        let err = decoder.decode(&payload).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Structural(StructuralError::ModuleNotAnObject)
        );
    }

    #[test]
    fn test_body_must_be_object() {
        let registry = registry();
        let decoder = FormDecoder::new(&registry);

        let err = decoder.decode(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err, DecodeError::Structural(StructuralError::BodyNotAnObject));
    }

    #[test]
    fn test_modules_entry_is_required() {
        let registry = registry();
        let decoder = FormDecoder::new(&registry);
        let mut payload = form_payload();
        payload.as_object_mut().unwrap().remove("modules");

        let errors = expect_validation(decoder.decode(&payload));
        assert_eq!(errors.as_slice()[0].field, "modules");
        assert_eq!(errors.as_slice()[0].message, "is required");

        let mut payload = form_payload();
        payload["modules"] = json!({});
        let errors = expect_validation(decoder.decode(&payload));
        assert_eq!(errors.as_slice()[0].message, "must be an array");
    }

    #[test]
    fn test_form_sections_are_validated() {
        let registry = registry();
        let decoder = FormDecoder::new(&registry);
        let mut payload = form_payload();
        payload["properties"]
            .as_object_mut()
            .unwrap()
            .remove("font_color");
        payload["button"]["font_size"] = json!(16);

        let errors = expect_validation(decoder.decode(&payload));

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["properties.font_color", "button.font_size"]);
        assert_eq!(errors.as_slice()[1].message, "must be a string");
    }

    #[test]
    fn test_decode_with_id_keeps_path_identifier() {
        let registry = registry();
        let decoder = FormDecoder::new(&registry);
        let mut payload = form_payload();
        payload["id"] = json!("body-id");
        payload["modules"][0]["id"] = json!("module-1");

        let form = decoder
            .decode_with_id(EntityId::from_string("path-id"), &payload)
            .unwrap();

        assert_eq!(form.id().as_str(), "path-id");
        assert_eq!(form.modules()[0].id.as_str(), "module-1");
    }

    #[test]
    fn test_create_ignores_body_form_id() {
        let registry = registry();
        let decoder = FormDecoder::new(&registry);
        let mut payload = form_payload();
        payload["id"] = json!("client-picked");

        let form = decoder.decode(&payload).unwrap();
        assert_ne!(form.id().as_str(), "client-picked");
    }

    #[test]
    fn test_non_string_form_id_is_field_error() {
        let registry = registry();
        let decoder = FormDecoder::new(&registry);
        let mut payload = form_payload();
        payload["id"] = json!(42);

        let errors = expect_validation(decoder.decode(&payload));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.as_slice()[0].field, "id");
        assert_eq!(errors.as_slice()[0].message, "must be a string");
    }

    #[test]
    fn test_float_width_is_truncated() {
        let registry = registry();
        let decoder = ModuleDecoder::new(&registry);
        let mut payload = short_text_payload();
        payload["properties"]["width"] = json!(240.0);

        let module = decoder.decode(&payload).unwrap();
        let ModuleProperties::ShortText(properties) = module.properties else {
            panic!("expected short-text properties");
        };
        assert_eq!(properties.width, 240);
    }
}
