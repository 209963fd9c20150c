//! Builders for the JSON schemas attached to exposed components and tools.

use serde_json::{json, Map, Value as JsonValue};

pub fn string(description: &str) -> JsonValue {
    json!({ "type": "string", "description": description })
}

/// A string the orchestrator may fill incrementally while the model streams.
pub fn streaming_string(description: &str) -> JsonValue {
    json!({ "type": "string", "description": description, "x-streaming": true })
}

pub fn number(description: &str) -> JsonValue {
    json!({ "type": "number", "description": description })
}

pub fn boolean(description: &str) -> JsonValue {
    json!({ "type": "boolean", "description": description })
}

pub fn array(description: &str, items: JsonValue) -> JsonValue {
    json!({ "type": "array", "description": description, "items": items })
}

pub fn enumeration(description: &str, variants: &[&str]) -> JsonValue {
    json!({ "type": "string", "description": description, "enum": variants })
}

/// Object schema; every listed property is required.
pub fn object<I, K>(description: &str, properties: I) -> JsonValue
where
    I: IntoIterator<Item = (K, JsonValue)>,
    K: Into<String>,
{
    let properties: Map<String, JsonValue> =
        properties.into_iter().map(|(k, v)| (k.into(), v)).collect();
    let required: Vec<&String> = properties.keys().collect();
    json!({
        "type": "object",
        "description": description,
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

/// Schema for a capability that takes no input.
pub fn empty() -> JsonValue {
    object::<[(String, JsonValue); 0], String>("No input", [])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_lists_required_properties() {
        let schema = object(
            "Product search input",
            [("term", string("The search term to find the product"))],
        );
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["term"]["type"], "string");
        assert_eq!(schema["required"], json!(["term"]));
    }

    #[test]
    fn enumeration_lists_variants() {
        let schema = enumeration("mode", &["createWithProducts", "addProducts"]);
        assert_eq!(schema["enum"][1], "addProducts");
    }

    #[test]
    fn nested_array_of_objects() {
        let schema = array(
            "products",
            object("product", [("id", number("id")), ("name", string("name"))]),
        );
        assert_eq!(schema["items"]["properties"]["id"]["type"], "number");
    }

    #[test]
    fn scalar_builders_carry_type_and_description() {
        let flag = boolean("Whether to include archived items");
        assert_eq!(flag["type"], "boolean");
        assert_eq!(flag["description"], "Whether to include archived items");
        assert_eq!(number("count")["type"], "number");
        assert_eq!(string("name")["type"], "string");
    }

    #[test]
    fn streaming_string_is_marked() {
        assert_eq!(streaming_string("md")["x-streaming"], true);
    }

    #[test]
    fn empty_object_has_no_properties() {
        let schema = empty();
        assert!(schema["properties"].as_object().unwrap().is_empty());
        assert_eq!(schema["required"], json!([]));
    }
}
