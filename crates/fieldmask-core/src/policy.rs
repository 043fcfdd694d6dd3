use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Per-field masking configuration, keyed by field name.
///
/// Iteration is in sorted field-name order, which fixes the order in which
/// synthetic values are drawn for a record.
pub type FieldPolicy = BTreeMap<String, FieldRule>;

/// Masking rule applied to a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Restore the reference (pre-masking) value.
    #[default]
    None,
    /// Keep the first three characters, star the rest.
    Partial,
    /// Replace the value with a fixed token.
    Generalized,
    /// Replace the value with a short SHA-256 token.
    Hash,
    /// Replace the value with a fabricated one.
    Synthetic,
}

impl RuleKind {
    /// Parse a rule name, ignoring case. Unknown names fall back to [`RuleKind::None`].
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "partial" => Self::Partial,
            "generalized" => Self::Generalized,
            "hash" => Self::Hash,
            "synthetic" | "faker" => Self::Synthetic,
            _ => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Partial => "partial",
            Self::Generalized => "generalized",
            Self::Hash => "hash",
            Self::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RuleKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(RuleKind::parse).unwrap_or_default())
    }
}

/// Advisory value type recorded alongside a rule. Never changes masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
    Boolean,
}

impl DataType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        DataType::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown data type '{value}'")))
    }
}

/// Rule descriptor for one field: `{"maskingRule": "...", "dataType": "..."}`.
///
/// Decoding never fails: a descriptor without a usable `maskingRule` means
/// [`RuleKind::None`], and a bare string is read as the rule name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    #[serde(default)]
    pub masking_rule: RuleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
}

impl FieldRule {
    pub fn new(masking_rule: RuleKind) -> Self {
        Self {
            masking_rule,
            data_type: None,
        }
    }

    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }
}

impl<'de> Deserialize<'de> for FieldRule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let rule = match value {
            Value::Object(map) => FieldRule {
                masking_rule: map
                    .get("maskingRule")
                    .and_then(Value::as_str)
                    .map(RuleKind::parse)
                    .unwrap_or_default(),
                data_type: map
                    .get("dataType")
                    .and_then(Value::as_str)
                    .and_then(DataType::parse),
            },
            Value::String(name) => FieldRule::new(RuleKind::parse(&name)),
            _ => FieldRule::default(),
        };
        Ok(rule)
    }
}
