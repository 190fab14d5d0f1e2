//! Module and form encoding
//!
//! Flattens typed modules and forms back into wire JSON. Encoding walks
//! the same per-variant field bags the decoder fills, so a decoded value
//! always re-encodes to an equivalent object and decodes back unchanged.

use serde_json::{json, Map, Number, Value};

use super::schema::{FieldBag, FieldValue};
use super::Module;
use crate::domain::aggregates::{Form, FormButton, FormProperties};

/// Encode a module into its wire object.
pub fn encode_module(module: &Module) -> Value {
    let mut object = Map::new();
    object.insert("id".to_string(), Value::String(module.id.to_string()));
    object.insert(
        "type".to_string(),
        Value::String(module.type_tag().to_string()),
    );
    object.insert("name".to_string(), Value::String(module.name.clone()));
    object.insert(
        "properties".to_string(),
        bag_value(module.properties.to_bag()),
    );
    Value::Object(object)
}

/// Encode an ordered module list, preserving order.
pub fn encode_modules(modules: &[Module]) -> Value {
    Value::Array(modules.iter().map(encode_module).collect())
}

/// Encode a form into its wire object.
pub fn encode_form(form: &Form) -> Value {
    json!({
        "id": form.id().to_string(),
        "project_id": form.project_id().to_string(),
        "name": form.name(),
        "properties": encode_form_properties(form.properties()),
        "button": encode_form_button(form.button()),
        "modules": encode_modules(form.modules()),
    })
}

pub(crate) fn encode_form_properties(properties: &FormProperties) -> Value {
    bag_value(properties.to_bag())
}

pub(crate) fn encode_form_button(button: &FormButton) -> Value {
    bag_value(button.to_bag())
}

fn bag_value(bag: FieldBag) -> Value {
    let mut object = Map::new();
    for (key, value) in bag {
        object.insert(key.to_string(), field_value(value));
    }
    Value::Object(object)
}

fn field_value(value: FieldValue) -> Value {
    match value {
        FieldValue::Text(text) => Value::String(text),
        FieldValue::Flag(flag) => Value::Bool(flag),
        FieldValue::Integer(number) => Value::Number(Number::from(number)),
        FieldValue::Objects(elements) => {
            Value::Array(elements.into_iter().map(bag_value).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::modules::{FormDecoder, ModuleDecoder, ModuleRegistry};
    use serde_json::json;

    fn decode_module(payload: &Value) -> Module {
        let registry = ModuleRegistry::standard();
        ModuleDecoder::new(&registry).decode(payload).unwrap()
    }

    #[test]
    fn test_module_round_trip() {
        let payloads = [
            json!({
                "type": "short-text",
                "name": "q1",
                "properties": {
                    "label": "First name",
                    "sublabel": "Legal first name",
                    "tooltip": "",
                    "required": true,
                    "placeholder": "Jane",
                    "suffix": "",
                    "width_type": true,
                    "width": 240,
                    "validation": "none"
                }
            }),
            json!({
                "type": "multiple-choice",
                "name": "q2",
                "properties": {
                    "label": "Favorite fruit",
                    "sublabel": "",
                    "tooltip": "",
                    "required": false,
                    "placeholder": "",
                    "suffix": "",
                    "width_type": false,
                    "width": 100,
                    "options": [
                        {"id": "a", "value": "Apple"},
                        {"id": "b", "value": "Banana"}
                    ]
                }
            }),
            json!({
                "type": "heading",
                "name": "header",
                "properties": {
                    "title": "Contact",
                    "sublabel": "How to reach you",
                    "size": "large",
                    "alignment": "left",
                    "image_alignment": "top",
                    "vertical_alignment": "middle",
                    "image_width": 320
                }
            }),
            json!({
                "type": "full-name",
                "name": "who",
                "properties": {
                    "label": "Your name",
                    "tooltip": "",
                    "required": true,
                    "show_prefix": false,
                    "show_middle_name": true,
                    "show_suffix": false,
                    "prefix_sublabel": "",
                    "first_name_sublabel": "First",
                    "middle_name_sublabel": "Middle",
                    "last_name_sublabel": "Last",
                    "suffix_sublabel": ""
                }
            }),
        ];

        let registry = ModuleRegistry::standard();
        let decoder = ModuleDecoder::new(&registry);

        for payload in &payloads {
            let module = decode_module(payload);
            let encoded = encode_module(&module);
            let decoded_again = decoder.decode(&encoded).unwrap();
            assert_eq!(decoded_again, module);
        }
    }

    #[test]
    fn test_encoded_module_echoes_properties() {
        let payload = json!({
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
        });

        let module = decode_module(&payload);
        let encoded = encode_module(&module);

        assert_eq!(encoded["type"], json!("short-text"));
        assert_eq!(encoded["name"], json!("q1"));
        assert_eq!(encoded["id"], json!(module.id.as_str()));
        assert_eq!(encoded["properties"], payload["properties"]);
    }

    #[test]
    fn test_option_order_survives_round_trip() {
        let payload = json!({
            "type": "multiple-choice",
            "name": "q2",
            "properties": {
                "label": "Rank",
                "sublabel": "",
                "tooltip": "",
                "required": false,
                "placeholder": "",
                "suffix": "",
                "width_type": false,
                "width": 100,
                "options": [
                    {"id": "z", "value": "Zebra"},
                    {"id": "a", "value": "Aardvark"},
                    {"id": "m", "value": "Mole"}
                ]
            }
        });

        let module = decode_module(&payload);
        let encoded = encode_module(&module);

        assert_eq!(encoded["properties"]["options"], payload["properties"]["options"]);
    }

    #[test]
    fn test_form_round_trip() {
        let payload = json!({
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
            "modules": [
                {
                    "type": "heading",
                    "name": "header",
                    "properties": {
                        "title": "Survey",
                        "sublabel": "",
                        "size": "large",
                        "alignment": "center",
                        "image_alignment": "top",
                        "vertical_alignment": "middle",
                        "image_width": 0
                    }
                }
            ]
        });

        let registry = ModuleRegistry::standard();
        let decoder = FormDecoder::new(&registry);

        let form = decoder.decode(&payload).unwrap();
        let encoded = encode_form(&form);

        // Encoding adds the server-assigned identifiers, everything else
        // echoes the submission.
        assert_eq!(encoded["id"], json!(form.id().as_str()));
        assert_eq!(encoded["project_id"], payload["project_id"]);
        assert_eq!(encoded["name"], payload["name"]);
        assert_eq!(encoded["properties"], payload["properties"]);
        assert_eq!(encoded["button"], payload["button"]);
        assert_eq!(
            encoded["modules"][0]["properties"],
            payload["modules"][0]["properties"]
        );

        // And a stored encoding decodes back to the same form.
        let rehydrated = decoder
            .decode_with_id(form.id().clone(), &encoded)
            .unwrap();
        assert_eq!(encode_form(&rehydrated), encoded);
    }

    #[test]
    fn test_decode_list_rebuilds_stored_modules() {
        let registry = ModuleRegistry::standard();
        let decoder = FormDecoder::new(&registry);

        let payload = json!({
            "type": "short-text",
            "name": "q1",
            "properties": {
                "label": "Email",
                "sublabel": "",
                "tooltip": "",
                "required": true,
                "placeholder": "",
                "suffix": "",
                "width_type": false,
                "width": 100,
                "validation": "email"
            }
        });
        let module = decode_module(&payload);

        let stored = encode_modules(std::slice::from_ref(&module));
        let values = stored.as_array().unwrap();
        let rebuilt = decoder.decode_modules(values).unwrap();

        assert_eq!(rebuilt, vec![module]);
    }
}
