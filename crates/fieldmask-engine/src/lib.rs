//! Field-level masking engine for fieldmask.
//!
//! Applies a per-field policy to a batch of records: partial masking,
//! generalization, short hashes and synthetic replacement values.

pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod rules;
pub mod students;
pub mod synthetic;

pub use engine::{MaskOutcome, MaskingEngine, mask};
pub use errors::MaskError;
pub use model::{MaskOptions, MaskReport, SkipReason};
pub use students::generate_student_records;
pub use synthetic::{FieldCategory, LocaleKey, SyntheticGenerator};
