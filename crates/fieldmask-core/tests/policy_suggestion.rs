use fieldmask_core::{DataType, Record, RuleKind, field_names, suggest_policy};
use serde_json::json;

fn student_rows() -> Vec<Record> {
    serde_json::from_value(json!([
        {"StudentID": 1, "Name": "Alice Smith", "Year": 2, "GPA": 3.75, "PhoneNumber": "555-0100", "Active": true},
        {"StudentID": 2, "Name": "Bob Jones", "Year": 4, "GPA": 2.9, "PhoneNumber": "555-0101", "Active": false}
    ]))
    .expect("fixture records")
}

#[test]
fn suggests_rules_from_sampled_types() {
    let rows = student_rows();
    let fields = field_names(&rows);
    let policy = suggest_policy(&fields, &rows);

    assert_eq!(policy.len(), 6);
    assert_eq!(policy["Name"].masking_rule, RuleKind::Partial);
    assert_eq!(policy["Name"].data_type, Some(DataType::String));
    assert_eq!(policy["GPA"].masking_rule, RuleKind::Generalized);
    assert_eq!(policy["GPA"].data_type, Some(DataType::Number));
    assert_eq!(policy["Active"].masking_rule, RuleKind::Generalized);
    assert_eq!(policy["Active"].data_type, Some(DataType::Boolean));
    // "555-0100" is not a number.
    assert_eq!(policy["PhoneNumber"].masking_rule, RuleKind::Partial);
}

#[test]
fn empty_batch_leaves_fields_unmasked() {
    let fields = vec!["Name".to_string(), "GPA".to_string()];
    let policy = suggest_policy(&fields, &[]);

    for rule in policy.values() {
        assert_eq!(rule.masking_rule, RuleKind::None);
        assert_eq!(rule.data_type, Some(DataType::String));
    }
}
