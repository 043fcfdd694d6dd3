mod registry;
mod workspace;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use fieldmask_core::{
    Error as CoreError, MaskResponse, Record, field_names, parse_request, request_json_schema,
    suggest_policy,
};
use fieldmask_engine::{
    LocaleKey, MaskError, MaskOptions, MaskingEngine, generate_student_records,
};
use registry::{OutputFormat, init_logging, read_input, write_json, write_records};
use serde_json::Value;
use thiserror::Error;
use workspace::{EngineSettings, LogFormat, Settings, WorkspaceError, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("request error: {0}")]
    Core(#[from] CoreError),
    #[error("masking error: {0}")]
    Mask(#[from] MaskError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("masking failed: {0}")]
    MaskFailed(String),
}

#[derive(Parser, Debug)]
#[command(name = "fieldmask", version, about = "Field-level data masking")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Config file (defaults to ./fieldmask.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Log format on stderr.
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,
    /// Log level or filter directive (RUST_LOG takes precedence).
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mask a request document ({data, originalData, config}).
    Mask(MaskArgs),
    /// Emit synthetic student records.
    Generate(GenerateArgs),
    /// Suggest a masking policy for a batch of records.
    Suggest(SuggestArgs),
    /// Print the JSON Schema of the request document.
    Schema(SchemaArgs),
}

#[derive(Args, Debug)]
struct MaskArgs {
    /// Request document path, or `-` for stdin.
    #[arg(long, default_value = "-")]
    input: PathBuf,
    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Seed for synthetic values.
    #[arg(long)]
    seed: Option<u64>,
    /// Locale for synthetic values (en_US, pt_BR).
    #[arg(long)]
    locale: Option<String>,
    /// Write the run report as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of records.
    #[arg(long, default_value_t = 100)]
    count: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    locale: Option<String>,
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct SuggestArgs {
    /// Records (array or request document) path, or `-` for stdin.
    #[arg(long, default_value = "-")]
    input: PathBuf,
    /// Fields to include (defaults to every field seen in the records).
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(message) = failure_message(&err) {
                eprintln!("error: {message}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Text for stderr, or `None` when the failure was already reported.
fn failure_message(err: &CliError) -> Option<String> {
    match err {
        // Logged and written to the output as `{"error": ...}`.
        CliError::MaskFailed(_) => None,
        other => Some(other.to_string()),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut settings = load_settings(cli.global.config.as_deref())?;
    apply_global_overrides(&mut settings, cli.global);
    init_logging(&settings.logging)?;

    match cli.command {
        Command::Mask(args) => run_mask(args, &settings.engine),
        Command::Generate(args) => run_generate(args, &settings.engine),
        Command::Suggest(args) => run_suggest(args),
        Command::Schema(args) => run_schema(args),
    }
}

fn apply_global_overrides(settings: &mut Settings, global: GlobalArgs) {
    if let Some(file) = global.log_file {
        settings.logging.file = Some(file);
    }
    if let Some(format) = global.log_format {
        settings.logging.format = format;
    }
    if let Some(level) = global.log_level {
        settings.logging.level = Some(level);
    }
}

fn mask_options(
    seed: Option<u64>,
    locale: Option<&str>,
    engine: &EngineSettings,
) -> Result<MaskOptions, CliError> {
    let locale = match locale.or(engine.locale.as_deref()) {
        Some(value) => value.parse::<LocaleKey>()?,
        None => LocaleKey::default(),
    };
    Ok(MaskOptions {
        locale,
        seed: seed.or(engine.seed),
    })
}

fn run_mask(args: MaskArgs, engine_settings: &EngineSettings) -> Result<(), CliError> {
    let MaskArgs {
        input,
        out,
        format,
        seed,
        locale,
        report,
    } = args;

    let options = mask_options(seed, locale.as_deref(), engine_settings)?;
    let document = read_input(&input)?;
    let engine = MaskingEngine::new(options);

    let request = match parse_request(&document) {
        Ok(request) => request,
        Err(err) => {
            tracing::error!(event = "request_rejected", error = %err);
            return mask_failed(out.as_deref(), MaskError::from(err));
        }
    };

    // The engine logs its own failures.
    match engine.run(&request) {
        Ok(outcome) => {
            let bytes = write_records(out.as_deref(), &outcome.records, format)?;
            tracing::info!(
                event = "masked_written",
                run_id = %outcome.report.run_id,
                records = outcome.records.len(),
                bytes
            );
            if let Some(path) = report {
                write_json(Some(path.as_path()), &outcome.report)?;
                tracing::info!(event = "report_written", path = %path.display());
            }
            Ok(())
        }
        Err(err) => mask_failed(out.as_deref(), err),
    }
}

fn mask_failed(out: Option<&Path>, err: MaskError) -> Result<(), CliError> {
    let response = MaskResponse::from_result(Err::<Vec<Record>, _>(&err));
    write_json(out, &response)?;
    Err(CliError::MaskFailed(err.to_string()))
}

fn run_generate(args: GenerateArgs, engine_settings: &EngineSettings) -> Result<(), CliError> {
    let options = mask_options(args.seed, args.locale.as_deref(), engine_settings)?;
    let timer = Instant::now();

    let engine = MaskingEngine::new(options);
    let mut generator = engine.generator();
    let records = generate_student_records(args.count, &mut generator);
    let bytes = write_records(args.out.as_deref(), &records, args.format)?;

    tracing::info!(
        event = "students_generated",
        count = records.len(),
        locale = %generator.locale(),
        seeded = engine.options().seed.is_some(),
        bytes,
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

fn run_suggest(args: SuggestArgs) -> Result<(), CliError> {
    let document = read_input(&args.input)?;
    let records = suggestion_records(&document)?;
    let fields = if args.fields.is_empty() {
        field_names(&records)
    } else {
        args.fields
    };

    let policy = suggest_policy(&fields, &records);
    write_json(args.out.as_deref(), &policy)?;
    tracing::info!(
        event = "policy_suggested",
        fields = policy.len(),
        records = records.len()
    );
    Ok(())
}

/// Accept either a bare record array or a request document's `data`.
fn suggestion_records(document: &str) -> Result<Vec<Record>, CliError> {
    let value: Value = serde_json::from_str(document).map_err(CoreError::from)?;
    match value {
        Value::Array(_) => serde_json::from_value(value)
            .map_err(|err| CliError::InvalidInput(format!("records: {err}"))),
        Value::Object(_) => Ok(parse_request(document)?.data),
        _ => Err(CliError::InvalidInput(
            "expected a record array or a request object".to_string(),
        )),
    }
}

fn run_schema(args: SchemaArgs) -> Result<(), CliError> {
    let schema = request_json_schema();
    write_json(args.out.as_deref(), &schema)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_config() {
        let engine = EngineSettings {
            locale: Some("pt_BR".to_string()),
            seed: Some(1),
        };

        let options = mask_options(Some(9), None, &engine).expect("options");
        assert_eq!(options.seed, Some(9));
        assert_eq!(options.locale, LocaleKey::PtBr);

        let options = mask_options(None, Some("en_US"), &engine).expect("options");
        assert_eq!(options.seed, Some(1));
        assert_eq!(options.locale, LocaleKey::EnUs);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let result = mask_options(None, Some("xx_XX"), &EngineSettings::default());
        assert!(matches!(
            result,
            Err(CliError::Mask(MaskError::InvalidOptions(_)))
        ));
    }

    #[test]
    fn suggestion_input_accepts_arrays_and_requests() {
        let records = suggestion_records(r#"[{"Name": "Alice"}]"#).expect("array");
        assert_eq!(records.len(), 1);

        let records = suggestion_records(r#"{"data": [{"Name": "Alice"}, {"Name": "Bob"}]}"#)
            .expect("request");
        assert_eq!(records.len(), 2);

        assert!(matches!(
            suggestion_records("42"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn mask_failures_are_not_reported_twice() {
        let failed = CliError::MaskFailed("no reference record for index 0".to_string());
        assert_eq!(failure_message(&failed), None);

        let invalid = CliError::InvalidInput("expected a record array".to_string());
        assert_eq!(
            failure_message(&invalid).as_deref(),
            Some("invalid input: expected a record array")
        );
    }

    #[test]
    fn rejected_request_writes_error_document() {
        let dir = std::env::temp_dir().join(format!("fieldmask-cli-{}", std::process::id()));
        let out = dir.join("masked.json");

        let err = MaskError::InvalidOptions("bad".to_string());
        let result = mask_failed(Some(out.as_path()), err);
        assert!(matches!(result, Err(CliError::MaskFailed(_))));

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&out).expect("read output"))
                .expect("error json");
        assert_eq!(written["error"], "invalid options: bad");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn parses_mask_command() {
        let cli = Cli::try_parse_from([
            "fieldmask",
            "mask",
            "--input",
            "request.json",
            "--format",
            "csv",
            "--seed",
            "7",
            "--log-format",
            "json",
        ])
        .expect("parse args");

        assert_eq!(cli.global.log_format, Some(LogFormat::Json));
        match cli.command {
            Command::Mask(args) => {
                assert_eq!(args.input, PathBuf::from("request.json"));
                assert_eq!(args.format, OutputFormat::Csv);
                assert_eq!(args.seed, Some(7));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
