/// Formatter adapters for report output
mod csv_formatter;

pub use csv_formatter::{CsvFormatter, NO_LICENSE};
