use std::env;
use std::path::PathBuf;

use fieldmask_core::{FieldPolicy, FieldRule, MaskRequest, RuleKind};
use fieldmask_engine::output::write_records_csv;
use fieldmask_engine::{
    LocaleKey, MaskOptions, MaskingEngine, SyntheticGenerator, generate_student_records,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut count = 10_usize;
    let mut seed: Option<u64> = None;
    let mut out: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" => count = args.next().ok_or("missing --count value")?.parse()?,
            "--seed" => seed = Some(args.next().ok_or("missing --seed value")?.parse()?),
            "--out" => out = args.next().map(PathBuf::from),
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let mut generator = match seed {
        Some(seed) => SyntheticGenerator::seeded(seed, LocaleKey::EnUs),
        None => SyntheticGenerator::new(LocaleKey::EnUs),
    };
    let students = generate_student_records(count, &mut generator);

    let mut policy = FieldPolicy::new();
    policy.insert("Name".to_string(), FieldRule::new(RuleKind::Partial));
    policy.insert("GPA".to_string(), FieldRule::new(RuleKind::Generalized));
    policy.insert("PhoneNumber".to_string(), FieldRule::new(RuleKind::Hash));
    policy.insert("Address".to_string(), FieldRule::new(RuleKind::Synthetic));

    let engine = MaskingEngine::new(MaskOptions {
        locale: LocaleKey::EnUs,
        seed,
    });
    let outcome = engine.run(&MaskRequest::new(students, policy))?;

    match out {
        Some(path) => {
            let bytes = write_records_csv(&path, &outcome.records)?;
            println!("wrote {bytes} bytes to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&outcome.records)?),
    }
    Ok(())
}
