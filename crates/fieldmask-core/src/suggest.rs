//! Starting-point policies derived from a sample of the data.

use serde_json::Value;

use crate::policy::{DataType, FieldPolicy, FieldRule, RuleKind};
use crate::record::Record;

/// Number of leading records inspected per field.
const SAMPLE_SIZE: usize = 5;

/// Guess the value type of `field` from the first few records.
///
/// The first sample that looks numeric or boolean decides; nulls, missing
/// values and plain text are skipped.
pub fn infer_data_type(field: &str, records: &[Record]) -> DataType {
    for record in records.iter().take(SAMPLE_SIZE) {
        match record.get(field) {
            Some(Value::Number(_)) => return DataType::Number,
            Some(Value::Bool(_)) => return DataType::Boolean,
            Some(Value::String(text)) => {
                if is_numeric_text(text) {
                    return DataType::Number;
                }
                if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
                    return DataType::Boolean;
                }
            }
            _ => {}
        }
    }
    DataType::String
}

/// Suggest a rule per field: text is partially masked, numbers and booleans
/// are generalized. With no records to sample, every field is left unmasked.
pub fn suggest_policy(fields: &[String], records: &[Record]) -> FieldPolicy {
    fields
        .iter()
        .map(|field| {
            let rule = if records.is_empty() {
                FieldRule::new(RuleKind::None).with_data_type(DataType::String)
            } else {
                let data_type = infer_data_type(field, records);
                FieldRule::new(suggested_rule(data_type)).with_data_type(data_type)
            };
            (field.clone(), rule)
        })
        .collect()
}

fn suggested_rule(data_type: DataType) -> RuleKind {
    match data_type {
        DataType::String => RuleKind::Partial,
        DataType::Number | DataType::Boolean => RuleKind::Generalized,
    }
}

fn is_numeric_text(text: &str) -> bool {
    text.trim()
        .parse::<f64>()
        .is_ok_and(|number| number.is_finite())
}
