use std::path::Path;
use uv_deps_csv::prelude::*;

/// Mock ProjectConfigReader for testing
pub struct MockProjectConfigReader {
    pub project_name: String,
    pub version: Option<String>,
    pub should_fail: bool,
}

impl MockProjectConfigReader {
    pub fn new(project_name: &str, version: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            version: Some(version.to_string()),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            project_name: String::new(),
            version: None,
            should_fail: true,
        }
    }
}

impl ProjectConfigReader for MockProjectConfigReader {
    fn read_project_identity(&self, _project_path: &Path) -> Result<ProjectIdentity> {
        if self.should_fail {
            anyhow::bail!("Mock project config read failure");
        }
        Ok(ProjectIdentity::new(
            PackageName::new(self.project_name.clone())?,
            self.version.clone(),
        ))
    }
}
