use crate::dependency_report::domain::{Artifact, LicenseInfo};

/// One listed dependency, ready for formatting
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyRow {
    pub name: String,
    pub version: String,
    pub file_name: String,
    pub licenses: Vec<String>,
    pub description: Option<String>,
}

impl DependencyRow {
    /// Combines a resolved artifact with its published metadata.
    /// The locked name stands in when the index has no display name.
    ///
    /// Returns `None` if the artifact has no distribution file.
    pub fn from_artifact(artifact: &Artifact, info: LicenseInfo) -> Option<Self> {
        let file = artifact.file()?;
        Some(Self {
            name: info
                .display_name()
                .unwrap_or(artifact.name())
                .to_string(),
            version: artifact.version().to_string(),
            file_name: file.file_name().to_string(),
            licenses: info.licenses().to_vec(),
            description: info.description().map(str::to_string),
        })
    }
}

/// Why an artifact has no row in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No distribution file, even after resolution
    NoFile,
    /// Index metadata could not be fetched
    MetadataUnavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedArtifact {
    pub id: String,
    pub reason: SkipReason,
}

/// DependencyReport read model: rows in report order plus what was left out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyReport {
    pub rows: Vec<DependencyRow>,
    pub skipped: Vec<SkippedArtifact>,
}

impl DependencyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: DependencyRow) {
        self.rows.push(row);
    }

    pub fn skip(&mut self, artifact: &Artifact, reason: SkipReason) {
        self.skipped.push(SkippedArtifact {
            id: artifact.id(),
            reason,
        });
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
