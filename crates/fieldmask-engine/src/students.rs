//! Demo batches shaped like the `students` table the masking UI works on.

use serde_json::{Value, json};

use fieldmask_core::Record;

use crate::synthetic::SyntheticGenerator;

/// Column width of `PhoneNumber` in the students table.
const PHONE_MAX_CHARS: usize = 15;

/// Build `count` student rows with sequential `StudentID`s starting at 1.
pub fn generate_student_records(count: usize, generator: &mut SyntheticGenerator) -> Vec<Record> {
    (1..=count)
        .map(|student_id| {
            let mut record = Record::new();
            record.insert("StudentID".to_string(), json!(student_id));
            record.insert("Name".to_string(), Value::String(generator.name()));
            record.insert("Year".to_string(), json!(generator.year()));
            record.insert("GPA".to_string(), json!(generator.gpa()));
            let phone: String = generator.phone_number().chars().take(PHONE_MAX_CHARS).collect();
            record.insert("PhoneNumber".to_string(), Value::String(phone));
            record.insert("Address".to_string(), Value::String(generator.address()));
            record
        })
        .collect()
}
