use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use fieldmask_core::{Record, field_names, value_to_text};

/// Write records as CSV to `path`. Returns the number of bytes written.
pub fn write_records_csv(path: &Path, records: &[Record]) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    write_records_csv_to(writer, records)
}

/// Write records as CSV to any writer.
///
/// The header is the union of field names in first-appearance order; missing
/// fields and nulls become empty cells.
pub fn write_records_csv_to<W: Write>(writer: W, records: &[Record]) -> Result<u64, csv::Error> {
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_writer(counting);

    let header = field_names(records);
    if !header.is_empty() {
        writer.write_record(&header)?;
    }

    for record in records {
        let row: Vec<String> = header
            .iter()
            .map(|field| match record.get(field) {
                None | Some(Value::Null) => String::new(),
                Some(value) => value_to_text(value),
            })
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
