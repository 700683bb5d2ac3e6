use crate::dependency_report::domain::ProjectIdentity;
use crate::shared::Result;
use std::path::Path;

/// ProjectConfigReader port for reading project configuration
///
/// This port abstracts the file system operations needed to read
/// project metadata from configuration files (e.g., pyproject.toml).
pub trait ProjectConfigReader {
    /// Reads the project name and, when declared statically, its version
    ///
    /// # Errors
    /// Returns an error if:
    /// - The configuration file (pyproject.toml) does not exist
    /// - The file cannot be parsed
    /// - The project name field is missing or invalid
    fn read_project_identity(&self, project_path: &Path) -> Result<ProjectIdentity>;
}
