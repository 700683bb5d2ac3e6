use crate::application::read_models::{DependencyReport, DependencyRow};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Field separator; every field, the last one included, is terminated by it
const SEPARATOR: char = ';';

/// Header line, in column order
const HEADER: [&str; 5] = ["Name", "Version", "Filename", "Licenses", "Description"];

/// Written in the licenses column when no license is known
pub const NO_LICENSE: &str = "No project license is defined for this project.";

/// CsvFormatter adapter for the semicolon-separated dependency listing
///
/// Fields are not quoted. Instead, `"` is removed from names and line
/// breaks are removed from descriptions so every row stays on one line.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn push_line<'a>(output: &mut String, fields: impl IntoIterator<Item = &'a str>) {
        for field in fields {
            output.push_str(field);
            output.push(SEPARATOR);
        }
        output.push('\n');
    }

    fn name_field(name: &str) -> String {
        name.replace('"', "")
    }

    /// An empty list gets the no-license text; unnamed licenses in a
    /// non-empty list are dropped, which may leave the field empty
    fn licenses_field(licenses: &[String]) -> String {
        if licenses.is_empty() {
            return NO_LICENSE.to_string();
        }
        licenses
            .iter()
            .map(String::as_str)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn description_field(description: Option<&str>) -> String {
        description
            .unwrap_or_default()
            .chars()
            .filter(|c| *c != '\n' && *c != '\r')
            .collect()
    }

    fn render_row(output: &mut String, row: &DependencyRow) {
        let name = Self::name_field(&row.name);
        let licenses = Self::licenses_field(&row.licenses);
        let description = Self::description_field(row.description.as_deref());

        Self::push_line(
            output,
            [
                name.as_str(),
                row.version.as_str(),
                row.file_name.as_str(),
                licenses.as_str(),
                description.as_str(),
            ],
        );
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, report: &DependencyReport) -> Result<String> {
        let mut output = String::new();
        Self::push_line(&mut output, HEADER);
        for row in &report.rows {
            Self::render_row(&mut output, row);
        }
        Ok(output)
    }
}
