use std::io::{self, Read, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use fieldmask_core::Record;
use fieldmask_engine::output::write_records_csv_to;

use crate::workspace::write_bytes_atomic;

use super::RegistryResult;

/// Serialization used for record batches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Read a document from `path`, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> RegistryResult<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().lock().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Pretty JSON to `out`, or to stdout when no path is given.
pub fn write_json<T: Serialize + ?Sized>(out: Option<&Path>, value: &T) -> RegistryResult<()> {
    let mut data = serde_json::to_vec_pretty(value)?;
    data.push(b'\n');
    write_output(out, &data)
}

/// Write a record batch in the requested format. Returns the bytes written.
pub fn write_records(
    out: Option<&Path>,
    records: &[Record],
    format: OutputFormat,
) -> RegistryResult<u64> {
    let data = match format {
        OutputFormat::Json => {
            let mut data = serde_json::to_vec_pretty(records)?;
            data.push(b'\n');
            data
        }
        OutputFormat::Csv => {
            let mut data = Vec::new();
            write_records_csv_to(&mut data, records)?;
            data
        }
    };
    write_output(out, &data)?;
    Ok(data.len() as u64)
}

fn write_output(out: Option<&Path>, data: &[u8]) -> RegistryResult<()> {
    match out {
        Some(path) => write_bytes_atomic(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
