use super::Package;

/// Where uv locked an artifact from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    Registry(String),
    Git(String),
    Url(String),
    Path(String),
    Directory(String),
    Editable(String),
    Virtual(String),
}

impl ArtifactSource {
    /// Locally sourced artifacts are never published to an index, so they
    /// are never handed to the resolver.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ArtifactSource::Path(_)
                | ArtifactSource::Directory(_)
                | ArtifactSource::Editable(_)
                | ArtifactSource::Virtual(_)
        )
    }
}

/// Dependency scope derived from how the root project reaches an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyScope {
    /// Reachable through the project's dependencies or optional dependencies
    Runtime,
    /// Reachable only through dev-dependency groups
    Dev,
}

/// A distribution file (wheel or sdist) of an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionFile {
    file_name: String,
    location: Option<String>,
}

impl DistributionFile {
    pub fn new(file_name: String, location: Option<String>) -> Self {
        Self {
            file_name,
            location,
        }
    }

    /// Builds a file from a URL or path, taking the last path segment as the name.
    ///
    /// Returns `None` when the location has no usable file name.
    pub fn from_location(location: &str) -> Option<Self> {
        let without_fragment = location.split(['#', '?']).next().unwrap_or(location);
        let file_name = without_fragment
            .trim_end_matches(['/', '\\'])
            .rsplit(['/', '\\'])
            .next()
            .filter(|name| !name.is_empty() && *name != "." && *name != "..")?;

        Some(Self::new(file_name.to_string(), Some(location.to_string())))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Pure-Python wheels that install anywhere
    pub fn is_universal_wheel(&self) -> bool {
        self.file_name.ends_with("-py3-none-any.whl")
            || self.file_name.ends_with("-py2.py3-none-any.whl")
    }

    /// Picks the file to report from a release's wheels and sdist:
    /// the first universal wheel, else the first wheel, else the sdist.
    pub fn select(wheels: Vec<DistributionFile>, sdist: Option<DistributionFile>) -> Option<Self> {
        if let Some(universal) = wheels.iter().position(DistributionFile::is_universal_wheel) {
            return wheels.into_iter().nth(universal);
        }
        wheels.into_iter().next().or(sdist)
    }
}

/// Artifact: a locked package plus what the report needs to know about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    package: Package,
    source: ArtifactSource,
    scope: DependencyScope,
    file: Option<DistributionFile>,
}

impl Artifact {
    pub fn new(package: Package, source: ArtifactSource, file: Option<DistributionFile>) -> Self {
        Self {
            package,
            source,
            scope: DependencyScope::Runtime,
            file,
        }
    }

    pub fn with_scope(mut self, scope: DependencyScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn name(&self) -> &str {
        self.package.name()
    }

    pub fn version(&self) -> &str {
        self.package.version()
    }

    pub fn id(&self) -> String {
        self.package.id()
    }

    pub fn source(&self) -> &ArtifactSource {
        &self.source
    }

    pub fn scope(&self) -> DependencyScope {
        self.scope
    }

    pub fn file(&self) -> Option<&DistributionFile> {
        self.file.as_ref()
    }

    pub fn set_file(&mut self, file: DistributionFile) {
        self.file = Some(file);
    }
}
