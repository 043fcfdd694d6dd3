//! Core contracts and helpers for fieldmask.
//!
//! This crate defines the record, policy and request types exchanged with the
//! masking engine, plus helpers that need no randomness or I/O.

pub mod error;
pub mod policy;
pub mod record;
pub mod request;
pub mod schema;
pub mod suggest;

pub use error::{Error, Result};
pub use policy::{DataType, FieldPolicy, FieldRule, RuleKind};
pub use record::{Record, field_names, value_to_text};
pub use request::{MaskRequest, MaskResponse, parse_request};
pub use schema::request_json_schema;
pub use suggest::{infer_data_type, suggest_policy};
