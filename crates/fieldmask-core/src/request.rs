use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::policy::FieldPolicy;
use crate::record::Record;

/// Input document for a masking call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaskRequest {
    /// Records to mask.
    #[serde(default)]
    pub data: Vec<Record>,
    /// Pre-masking values aligned by position with `data`; defaults to `data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_data: Option<Vec<Record>>,
    /// Field name to rule descriptor.
    #[serde(default)]
    pub config: FieldPolicy,
}

impl MaskRequest {
    pub fn new(data: Vec<Record>, config: FieldPolicy) -> Self {
        Self {
            data,
            original_data: None,
            config,
        }
    }

    pub fn with_original_data(mut self, original_data: Vec<Record>) -> Self {
        self.original_data = Some(original_data);
        self
    }

    /// Reference records used by the `none` rule.
    pub fn reference_records(&self) -> &[Record] {
        self.original_data.as_deref().unwrap_or(&self.data)
    }
}

/// Decode a request document.
pub fn parse_request(input: &str) -> Result<MaskRequest> {
    let value: Value = serde_json::from_str(input)?;
    if !value.is_object() {
        return Err(Error::InvalidRequest(
            "request must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|err| Error::InvalidRequest(err.to_string()))
}

/// Output document: the masked batch, or a single error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MaskResponse {
    Masked(Vec<Record>),
    Failed { error: String },
}

impl MaskResponse {
    pub fn from_result<E: Display>(result: std::result::Result<Vec<Record>, E>) -> Self {
        match result {
            Ok(records) => MaskResponse::Masked(records),
            Err(err) => MaskResponse::Failed {
                error: err.to_string(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MaskResponse::Failed { .. })
    }
}
