use serde_json::{Map, Value};

/// One row of structured data. Field order follows the input document.
pub type Record = Map<String, Value>;

/// Textual form of a field value for tabular output.
///
/// Strings are returned verbatim; every other value uses its compact JSON
/// rendering (`3.75`, `true`, `null`, ...).
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Union of field names across a batch, in order of first appearance.
pub fn field_names(records: &[Record]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !names.iter().any(|name| name == key) {
                names.push(key.clone());
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn text_form_matches_json_rendering() {
        assert_eq!(value_to_text(&json!("Alice")), "Alice");
        assert_eq!(value_to_text(&json!(3.75)), "3.75");
        assert_eq!(value_to_text(&json!(2)), "2");
        assert_eq!(value_to_text(&json!(true)), "true");
        assert_eq!(value_to_text(&Value::Null), "null");
        assert_eq!(value_to_text(&json!([1, "a"])), "[1,\"a\"]");
    }

    #[test]
    fn field_names_keep_first_appearance_order() {
        let records = vec![
            record(json!({"Name": "A", "GPA": 3.1})),
            record(json!({"Year": 2, "Name": "B"})),
        ];
        assert_eq!(field_names(&records), vec!["Name", "GPA", "Year"]);
    }
}
