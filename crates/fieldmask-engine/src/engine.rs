use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, warn};

use fieldmask_core::{FieldPolicy, MaskRequest, Record, RuleKind};

use crate::errors::MaskError;
use crate::model::{MaskOptions, MaskReport, SkipReason};
use crate::rules::{GENERALIZED_TOKEN, hash_token, partial_mask};
use crate::synthetic::{FieldCategory, SyntheticGenerator};

/// Result of a masking run.
#[derive(Debug, Clone)]
pub struct MaskOutcome {
    pub records: Vec<Record>,
    pub report: MaskReport,
}

/// Entry point for masking request documents.
///
/// Holds only options; every run builds its own [`SyntheticGenerator`], so one
/// engine can serve concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct MaskingEngine {
    options: MaskOptions,
}

impl MaskingEngine {
    pub fn new(options: MaskOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MaskOptions {
        &self.options
    }

    /// Fresh generator for one run, seeded when the options carry a seed.
    pub fn generator(&self) -> SyntheticGenerator {
        match self.options.seed {
            Some(seed) => SyntheticGenerator::seeded(seed, self.options.locale),
            None => SyntheticGenerator::new(self.options.locale),
        }
    }

    pub fn run(&self, request: &MaskRequest) -> Result<MaskOutcome, MaskError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report = MaskReport::new(run_id.clone());
        let mut generator = self.generator();

        info!(
            run_id = %run_id,
            records = request.data.len(),
            reference_records = request.reference_records().len(),
            fields = request.config.len(),
            locale = %generator.locale(),
            seeded = self.options().seed.is_some(),
            "masking started"
        );

        let records = match mask_batch(
            &request.data,
            request.reference_records(),
            &request.config,
            &mut generator,
            &mut report,
        ) {
            Ok(records) => records,
            Err(err) => {
                warn!(run_id = %run_id, error = %err, "masking failed");
                return Err(err);
            }
        };

        report.records = records.len() as u64;
        report.duration_ms = start.elapsed().as_millis() as u64;

        let missing_reference = report.skip_count(SkipReason::ReferenceFieldAbsent);
        if missing_reference > 0 {
            warn!(
                run_id = %run_id,
                count = missing_reference,
                "reference records lacked fields under the none rule; values left as-is"
            );
        }
        info!(
            run_id = %run_id,
            records = report.records,
            duration_ms = report.duration_ms,
            "masking finished"
        );

        Ok(MaskOutcome { records, report })
    }
}

/// Mask `records` under `policy`.
///
/// `reference` holds the pre-masking values restored by the `none` rule and
/// defaults to `records` itself. Inputs are never modified.
pub fn mask(
    records: &[Record],
    reference: Option<&[Record]>,
    policy: &FieldPolicy,
    generator: &mut SyntheticGenerator,
) -> Result<Vec<Record>, MaskError> {
    let mut report = MaskReport::new(String::new());
    mask_batch(
        records,
        reference.unwrap_or(records),
        policy,
        generator,
        &mut report,
    )
}

enum FieldOutcome {
    Applied,
    Skipped(SkipReason),
}

fn mask_batch(
    records: &[Record],
    reference: &[Record],
    policy: &FieldPolicy,
    generator: &mut SyntheticGenerator,
    report: &mut MaskReport,
) -> Result<Vec<Record>, MaskError> {
    let mut masked = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let mut copy = record.clone();
        for (field, rule) in policy {
            let rule = rule.masking_rule;
            match apply_rule(rule, field, &mut copy, index, reference, generator)? {
                FieldOutcome::Applied => {
                    debug!(index, field = %field, rule = %rule, "rule applied");
                    report.record_rule(rule);
                }
                FieldOutcome::Skipped(reason) => {
                    debug!(index, field = %field, rule = %rule, reason = reason.code(), "rule skipped");
                    report.record_skip(reason);
                }
            }
        }
        masked.push(copy);
    }
    Ok(masked)
}

fn apply_rule(
    rule: RuleKind,
    field: &str,
    record: &mut Record,
    index: usize,
    reference: &[Record],
    generator: &mut SyntheticGenerator,
) -> Result<FieldOutcome, MaskError> {
    let outcome = match rule {
        RuleKind::None => {
            let original = reference.get(index).ok_or(MaskError::Alignment {
                index,
                available: reference.len(),
            })?;
            match original.get(field) {
                Some(value) => {
                    record.insert(field.to_string(), value.clone());
                    FieldOutcome::Applied
                }
                None => FieldOutcome::Skipped(SkipReason::ReferenceFieldAbsent),
            }
        }
        RuleKind::Partial => match record.get_mut(field) {
            Some(Value::String(text)) => match partial_mask(text) {
                Some(masked) => {
                    *text = masked;
                    FieldOutcome::Applied
                }
                None => FieldOutcome::Skipped(SkipReason::TooShort),
            },
            Some(_) => FieldOutcome::Skipped(SkipReason::NotText),
            None => FieldOutcome::Skipped(SkipReason::FieldAbsent),
        },
        RuleKind::Generalized => replace_present(record, field, |_| {
            Value::String(GENERALIZED_TOKEN.to_string())
        }),
        RuleKind::Hash => replace_present(record, field, |value| Value::String(hash_token(value))),
        RuleKind::Synthetic => {
            let category = FieldCategory::from_field_name(field);
            debug!(field, category = category.as_str(), "synthetic category");
            replace_present(record, field, |_| generator.generate(category))
        }
    };
    Ok(outcome)
}

fn replace_present(
    record: &mut Record,
    field: &str,
    replace: impl FnOnce(&Value) -> Value,
) -> FieldOutcome {
    match record.get_mut(field) {
        Some(value) => {
            *value = replace(value);
            FieldOutcome::Applied
        }
        None => FieldOutcome::Skipped(SkipReason::FieldAbsent),
    }
}
