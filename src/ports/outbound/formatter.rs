use crate::application::read_models::DependencyReport;
use crate::shared::Result;

/// ReportFormatter port for turning the report read model into text
pub trait ReportFormatter {
    /// Formats the whole report, header included
    ///
    /// # Errors
    /// Returns an error if formatting fails
    fn format(&self, report: &DependencyReport) -> Result<String>;
}
