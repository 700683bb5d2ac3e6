use super::lockfile_parser::parse_lockfile;
use crate::dependency_report::domain::{PackageName, ProjectIdentity};
use crate::ports::outbound::{LockfileParseResult, LockfileReader, ProjectConfigReader};
use crate::shared::error::ReportError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both LockfileReader and ProjectConfigReader ports,
/// providing file system access for reading lockfiles and project configuration.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, project_path: &Path) -> Result<String> {
        let lockfile_path = project_path.join("uv.lock");

        if !lockfile_path.exists() {
            return Err(ReportError::LockfileNotFound {
                path: lockfile_path.clone(),
                suggestion: format!(
                    "uv.lock file does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of a uv project, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        read_checked(&lockfile_path, "uv.lock")
    }

    fn read_and_parse_lockfile(&self, project_path: &Path) -> Result<LockfileParseResult> {
        let content = self.read_lockfile(project_path)?;

        parse_lockfile(&content).map_err(|e| {
            ReportError::LockfileParseError {
                path: project_path.join("uv.lock"),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ProjectConfigReader for FileSystemReader {
    fn read_project_identity(&self, project_path: &Path) -> Result<ProjectIdentity> {
        let pyproject_path = project_path.join("pyproject.toml");

        if !pyproject_path.exists() {
            anyhow::bail!("pyproject.toml not found in project directory");
        }

        let pyproject_content = read_checked(&pyproject_path, "pyproject.toml")?;

        let pyproject: toml::Value = toml::from_str(&pyproject_content)
            .map_err(|e| anyhow::anyhow!("Failed to parse pyproject.toml: {}", e))?;

        let project = pyproject.get("project");
        let name = project
            .and_then(|p| p.get("name"))
            .and_then(|n| n.as_str())
            .ok_or_else(|| anyhow::anyhow!("Project name not found in pyproject.toml"))?;

        // Absent when listed in `dynamic`
        let version = project
            .and_then(|p| p.get("version"))
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Ok(ProjectIdentity::new(
            PackageName::new(name.to_string())?,
            version,
        ))
    }
}
