pub mod csv;

pub use self::csv::{write_records_csv, write_records_csv_to};
