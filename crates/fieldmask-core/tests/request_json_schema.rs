use fieldmask_core::request_json_schema;

#[test]
fn request_schema_describes_wire_fields() {
    let schema = serde_json::to_value(request_json_schema()).expect("serialize schema");
    let properties = schema
        .get("properties")
        .and_then(|value| value.as_object())
        .expect("schema properties");

    assert!(properties.contains_key("data"));
    assert!(properties.contains_key("originalData"));
    assert!(properties.contains_key("config"));

    let rule_kind = schema
        .pointer("/definitions/RuleKind")
        .expect("rule kind definition")
        .to_string();
    for name in ["none", "partial", "generalized", "hash", "synthetic"] {
        assert!(rule_kind.contains(&format!("\"{name}\"")), "missing {name}");
    }
}
