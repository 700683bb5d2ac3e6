use crate::dependency_report::domain::{Artifact, DependencyMap};
use crate::shared::Result;
use std::path::Path;

/// Result of parsing a lockfile: every locked artifact and the edges between them
pub type LockfileParseResult = (Vec<Artifact>, DependencyMap);

/// LockfileReader port for reading the resolved dependency set
///
/// This port abstracts the file system operations needed to read
/// the uv.lock file from a project directory.
pub trait LockfileReader {
    /// Reads the uv.lock file from the specified project directory
    ///
    /// # Errors
    /// Returns an error if:
    /// - The uv.lock file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_lockfile(&self, project_path: &Path) -> Result<String>;

    /// Reads and parses the uv.lock file into artifacts and dependency edges
    ///
    /// # Errors
    /// Returns an error if the lockfile cannot be read or is not valid uv.lock TOML
    fn read_and_parse_lockfile(&self, project_path: &Path) -> Result<LockfileParseResult>;
}
