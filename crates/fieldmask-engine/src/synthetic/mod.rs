//! Plausible replacement values for the `synthetic` rule.
//!
//! A [`SyntheticGenerator`] owns its random source. Callers create one per run
//! (or per worker); nothing here is shared process-wide.

mod faker;
pub mod locales;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

pub use locales::LocaleKey;

/// Semantic category of a field, inferred from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    Name,
    Address,
    Phone,
    Year,
    Gpa,
    /// Anything not listed in the category table.
    Word,
}

/// Lower-cased field names and the category they select.
const CATEGORY_TABLE: &[(&str, FieldCategory)] = &[
    ("name", FieldCategory::Name),
    ("address", FieldCategory::Address),
    ("phonenumber", FieldCategory::Phone),
    ("phone", FieldCategory::Phone),
    ("mobile", FieldCategory::Phone),
    ("year", FieldCategory::Year),
    ("gpa", FieldCategory::Gpa),
];

impl FieldCategory {
    /// Case-insensitive exact match against the category table.
    pub fn from_field_name(field: &str) -> Self {
        let lowered = field.to_lowercase();
        CATEGORY_TABLE
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, category)| *category)
            .unwrap_or(FieldCategory::Word)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldCategory::Name => "name",
            FieldCategory::Address => "address",
            FieldCategory::Phone => "phone",
            FieldCategory::Year => "year",
            FieldCategory::Gpa => "gpa",
            FieldCategory::Word => "word",
        }
    }
}

const YEAR_MIN: i64 = 1;
const YEAR_MAX: i64 = 4;
const GPA_MAX: f64 = 4.0;

/// Source of fabricated values.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    rng: ChaCha8Rng,
    locale: LocaleKey,
}

impl SyntheticGenerator {
    /// Generator seeded from the thread-local entropy source.
    pub fn new(locale: LocaleKey) -> Self {
        Self::seeded(rand::random(), locale)
    }

    /// Reproducible generator: the same seed yields the same sequence.
    pub fn seeded(seed: u64, locale: LocaleKey) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            locale,
        }
    }

    pub fn locale(&self) -> LocaleKey {
        self.locale
    }

    pub fn generate(&mut self, category: FieldCategory) -> Value {
        match category {
            FieldCategory::Name => Value::String(self.name()),
            FieldCategory::Address => Value::String(self.address()),
            FieldCategory::Phone => Value::String(self.phone_number()),
            // Emitted as a string, unlike generated student rows.
            FieldCategory::Year => Value::String(self.year().to_string()),
            FieldCategory::Gpa => Value::from(self.gpa()),
            FieldCategory::Word => Value::String(self.word()),
        }
    }

    pub fn name(&mut self) -> String {
        faker::full_name(self.locale, &mut self.rng)
    }

    /// Postal address on a single line, comma separated.
    pub fn address(&mut self) -> String {
        single_line(&faker::postal_address(self.locale, &mut self.rng))
    }

    pub fn phone_number(&mut self) -> String {
        faker::phone_number(self.locale, &mut self.rng)
    }

    pub fn year(&mut self) -> i64 {
        self.rng.random_range(YEAR_MIN..=YEAR_MAX)
    }

    /// Value in `[0.0, 4.0]` rounded to two decimals.
    pub fn gpa(&mut self) -> f64 {
        let raw: f64 = self.rng.random_range(0.0..=GPA_MAX);
        ((raw * 100.0).round() / 100.0).clamp(0.0, GPA_MAX)
    }

    pub fn word(&mut self) -> String {
        faker::word(&mut self.rng)
    }
}

fn single_line(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
