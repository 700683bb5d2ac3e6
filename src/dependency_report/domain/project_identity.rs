use super::PackageName;

/// Name and version of the project the report is generated for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    name: PackageName,
    version: Option<String>,
}

impl ProjectIdentity {
    pub fn new(name: PackageName, version: Option<String>) -> Self {
        Self { name, version }
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// True when the locked package is this project's own release.
    /// A project without a declared version matches on name alone.
    pub fn matches(&self, name: &str, version: &str) -> bool {
        let same_name = PackageName::new(name.to_string())
            .map(|other| other.normalized() == self.name.normalized())
            .unwrap_or(false);
        same_name && self.version.as_deref().is_none_or(|v| v == version)
    }
}
