//! DTOs for product lookup endpoints.

use serde_json::{Map, Value};

/// Single-field lookup response: `{"<field>": "<value>"}`.
pub fn field_response(field: String, value: String) -> Value {
    let mut body = Map::new();
    body.insert(field, Value::String(value));
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_response_shape() {
        let body = field_response("calories".to_string(), "539".to_string());

        assert_eq!(body, json!({ "calories": "539" }));
    }
}
