use serde_json::Value;

use fieldmask_engine::{
    FieldCategory, LocaleKey, MaskOptions, MaskingEngine, SyntheticGenerator,
    generate_student_records,
};

#[test]
fn same_seed_same_values() {
    let mut first = SyntheticGenerator::seeded(1, LocaleKey::EnUs);
    let mut second = SyntheticGenerator::seeded(1, LocaleKey::EnUs);

    for category in [
        FieldCategory::Name,
        FieldCategory::Address,
        FieldCategory::Phone,
        FieldCategory::Year,
        FieldCategory::Gpa,
        FieldCategory::Word,
    ] {
        assert_eq!(first.generate(category), second.generate(category));
    }
}

#[test]
fn values_are_well_formed_per_category() {
    for locale in [LocaleKey::EnUs, LocaleKey::PtBr] {
        let mut generator = SyntheticGenerator::seeded(2024, locale);
        for _ in 0..200 {
            let year = generator.generate(FieldCategory::Year);
            let year: i64 = year
                .as_str()
                .and_then(|text| text.parse().ok())
                .expect("year is a numeric string");
            assert!((1..=4).contains(&year));

            let gpa = generator
                .generate(FieldCategory::Gpa)
                .as_f64()
                .expect("gpa is a number");
            assert!((0.0..=4.0).contains(&gpa));
            assert_eq!((gpa * 100.0).round() / 100.0, gpa);

            let address = generator.generate(FieldCategory::Address);
            let address = address.as_str().expect("address is text");
            assert!(!address.contains('\n'));
            assert!(address.contains(", "));

            for category in [FieldCategory::Name, FieldCategory::Phone, FieldCategory::Word] {
                let value = generator.generate(category);
                assert!(matches!(value, Value::String(ref text) if !text.trim().is_empty()));
            }
        }
    }
}

#[test]
fn unseeded_generators_diverge() {
    let mut first = SyntheticGenerator::new(LocaleKey::EnUs);
    let mut second = SyntheticGenerator::new(LocaleKey::EnUs);

    let first_names: Vec<Value> = (0..8).map(|_| first.generate(FieldCategory::Name)).collect();
    let second_names: Vec<Value> = (0..8).map(|_| second.generate(FieldCategory::Name)).collect();
    assert_ne!(first_names, second_names);
}

#[test]
fn locale_names_parse() {
    assert_eq!("en_US".parse::<LocaleKey>().ok(), Some(LocaleKey::EnUs));
    assert_eq!("pt_BR".parse::<LocaleKey>().ok(), Some(LocaleKey::PtBr));
    assert!("fr_FR".parse::<LocaleKey>().is_err());
    assert_eq!(LocaleKey::default().to_string(), "en_US");
}

#[test]
fn engine_generators_follow_options() {
    let engine = MaskingEngine::new(MaskOptions {
        locale: LocaleKey::PtBr,
        seed: Some(11),
    });
    assert_eq!(engine.options().seed, Some(11));

    let mut first = engine.generator();
    let mut second = engine.generator();
    assert_eq!(first.locale(), LocaleKey::PtBr);
    assert_eq!(
        first.generate(FieldCategory::Name),
        second.generate(FieldCategory::Name)
    );
}

#[test]
fn student_records_match_table_shape() {
    let mut generator = SyntheticGenerator::seeded(5, LocaleKey::EnUs);
    let rows = generate_student_records(25, &mut generator);

    assert_eq!(rows.len(), 25);
    for (index, row) in rows.iter().enumerate() {
        let keys: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["StudentID", "Name", "Year", "GPA", "PhoneNumber", "Address"]
        );
        assert_eq!(row["StudentID"].as_u64(), Some(index as u64 + 1));
        let year = row["Year"].as_i64().expect("integer year");
        assert!((1..=4).contains(&year));
        let gpa = row["GPA"].as_f64().expect("numeric gpa");
        assert!((0.0..=4.0).contains(&gpa));
        let phone = row["PhoneNumber"].as_str().expect("phone text");
        assert!(phone.chars().count() <= 15);
        assert!(!row["Address"].as_str().expect("address text").contains('\n'));
    }
}
