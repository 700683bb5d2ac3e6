use crate::dependency_report::domain::{
    Artifact, ArtifactSource, DependencyMap, DistributionFile, Package, PackageDependencies,
};
use crate::ports::outbound::LockfileParseResult;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Version reported for packages uv locks without one (virtual workspace roots)
const UNVERSIONED: &str = "0.0.0";

#[derive(Debug, Deserialize)]
struct UvLock {
    #[serde(default)]
    package: Vec<UvPackage>,
}

#[derive(Debug, Deserialize)]
struct UvPackage {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    source: Option<UvSource>,
    #[serde(default)]
    dependencies: Vec<UvDependency>,
    #[serde(default, rename = "optional-dependencies")]
    optional_dependencies: BTreeMap<String, Vec<UvDependency>>,
    #[serde(default, rename = "dev-dependencies")]
    dev_dependencies: BTreeMap<String, Vec<UvDependency>>,
    #[serde(default)]
    sdist: Option<UvFile>,
    #[serde(default)]
    wheels: Vec<UvFile>,
}

#[derive(Debug, Default, Deserialize)]
struct UvSource {
    registry: Option<String>,
    git: Option<String>,
    url: Option<String>,
    path: Option<String>,
    directory: Option<String>,
    editable: Option<String>,
    #[serde(rename = "virtual")]
    virtual_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UvDependency {
    name: String,
    #[serde(default)]
    extra: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct UvFile {
    url: Option<String>,
    path: Option<String>,
    filename: Option<String>,
}

impl UvSource {
    fn into_source(self) -> ArtifactSource {
        if let Some(p) = self.virtual_path {
            ArtifactSource::Virtual(p)
        } else if let Some(p) = self.editable {
            ArtifactSource::Editable(p)
        } else if let Some(p) = self.directory {
            ArtifactSource::Directory(p)
        } else if let Some(p) = self.path {
            ArtifactSource::Path(p)
        } else if let Some(u) = self.git {
            ArtifactSource::Git(u)
        } else if let Some(u) = self.url {
            ArtifactSource::Url(u)
        } else {
            ArtifactSource::Registry(self.registry.unwrap_or_default())
        }
    }
}

impl UvFile {
    fn into_distribution_file(self) -> Option<DistributionFile> {
        let location = self.url.or(self.path)?;
        match self.filename {
            Some(name) if !name.is_empty() => Some(DistributionFile::new(name, Some(location))),
            _ => DistributionFile::from_location(&location),
        }
    }
}

/// Parses uv.lock content into artifacts and the dependency map
///
/// Runtime edges of a package are its `dependencies` plus, for every
/// dependency that requests extras, that dependency's matching
/// `optional-dependencies`. A package's own optional dependencies are kept
/// apart; they only count for the project root, which is decided later.
/// `dev-dependencies` become dev edges.
pub fn parse_lockfile(content: &str) -> Result<LockfileParseResult> {
    let lockfile: UvLock = toml::from_str(content)?;

    // Optional dependency groups per package name, for extras lookups
    let optional_groups: HashMap<String, BTreeMap<String, Vec<String>>> = lockfile
        .package
        .iter()
        .map(|pkg| {
            let groups = pkg
                .optional_dependencies
                .iter()
                .map(|(group, deps)| {
                    (
                        group.clone(),
                        deps.iter().map(|d| d.name.clone()).collect::<Vec<_>>(),
                    )
                })
                .collect();
            (pkg.name.clone(), groups)
        })
        .collect();

    let mut artifacts = Vec::with_capacity(lockfile.package.len());
    let mut dependency_map = DependencyMap::new();

    for pkg in lockfile.package {
        let edges = dependency_map
            .entry(pkg.name.clone())
            .or_insert_with(PackageDependencies::default);

        for dep in &pkg.dependencies {
            push_unique(&mut edges.runtime, &dep.name);
            for extra in &dep.extra {
                let extra_deps = optional_groups
                    .get(&dep.name)
                    .and_then(|groups| groups.get(extra));
                for name in extra_deps.into_iter().flatten() {
                    push_unique(&mut edges.runtime, name);
                }
            }
        }
        for dep in pkg.optional_dependencies.values().flatten() {
            push_unique(&mut edges.optional, &dep.name);
        }
        for dep in pkg.dev_dependencies.values().flatten() {
            push_unique(&mut edges.dev, &dep.name);
        }

        let version = pkg.version.unwrap_or_else(|| UNVERSIONED.to_string());
        let package = Package::new(pkg.name, version)?;
        let source = pkg.source.unwrap_or_default().into_source();
        let wheels = pkg
            .wheels
            .into_iter()
            .filter_map(UvFile::into_distribution_file)
            .collect();
        let sdist = pkg.sdist.and_then(UvFile::into_distribution_file);

        artifacts.push(Artifact::new(
            package,
            source,
            DistributionFile::select(wheels, sdist),
        ));
    }

    Ok((artifacts, dependency_map))
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}
