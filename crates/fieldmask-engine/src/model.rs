use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldmask_core::RuleKind;

use crate::synthetic::LocaleKey;

/// Options for the masking engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaskOptions {
    /// Locale for synthetic values.
    #[serde(default)]
    pub locale: LocaleKey,
    /// Seed for synthetic values; unseeded runs draw fresh entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Why a policy entry left a field untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The field is not present in the record being masked.
    FieldAbsent,
    /// `partial` met a non-text value.
    NotText,
    /// `partial` met a value of three characters or fewer.
    TooShort,
    /// `none` found no such field in the reference record.
    ReferenceFieldAbsent,
}

impl SkipReason {
    pub fn code(self) -> &'static str {
        match self {
            SkipReason::FieldAbsent => "field_absent",
            SkipReason::NotText => "not_text",
            SkipReason::TooShort => "too_short",
            SkipReason::ReferenceFieldAbsent => "reference_field_absent",
        }
    }
}

/// Report for a masking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub records: u64,
    pub rule_usage: BTreeMap<String, u64>,
    pub skipped: BTreeMap<String, u64>,
    pub duration_ms: u64,
}

impl MaskReport {
    pub fn new(run_id: String) -> Self {
        Self {
            run_id,
            started_at: Utc::now(),
            records: 0,
            rule_usage: BTreeMap::new(),
            skipped: BTreeMap::new(),
            duration_ms: 0,
        }
    }

    pub fn record_rule(&mut self, rule: RuleKind) {
        *self.rule_usage.entry(rule.as_str().to_string()).or_insert(0) += 1;
    }

    pub fn record_skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason.code().to_string()).or_insert(0) += 1;
    }

    pub fn rule_count(&self, rule: RuleKind) -> u64 {
        self.rule_usage.get(rule.as_str()).copied().unwrap_or(0)
    }

    pub fn skip_count(&self, reason: SkipReason) -> u64 {
        self.skipped.get(reason.code()).copied().unwrap_or(0)
    }
}
