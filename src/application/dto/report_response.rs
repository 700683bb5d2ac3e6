use crate::application::read_models::DependencyReport;
use crate::dependency_report::domain::DependencyGraph;

/// ReportResponse - response DTO from the dependency report use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Rows and skipped artifacts, in report order
    pub report: DependencyReport,
    /// The analyzed graph the report was built from
    pub dependency_graph: DependencyGraph,
}

impl ReportResponse {
    pub fn new(report: DependencyReport, dependency_graph: DependencyGraph) -> Self {
        Self {
            report,
            dependency_graph,
        }
    }
}
