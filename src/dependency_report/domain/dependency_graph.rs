use super::{Artifact, PackageName};
use std::collections::HashMap;

/// Outgoing edges of one locked package, keyed by target package name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDependencies {
    /// `dependencies` plus the optional dependencies of requested extras
    pub runtime: Vec<String>,
    /// The package's own `optional-dependencies` groups; followed only from the root
    pub optional: Vec<String>,
    /// `dev-dependencies` groups
    pub dev: Vec<String>,
}

impl PackageDependencies {
    /// Edges the root project needs at runtime
    pub fn root_runtime(&self) -> impl Iterator<Item = &String> {
        self.runtime.iter().chain(self.optional.iter())
    }

    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.root_runtime().chain(self.dev.iter())
    }
}

/// Locked package name to its outgoing edges
pub type DependencyMap = HashMap<String, PackageDependencies>;

/// DependencyGraph aggregate: the root project and everything it reaches
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    root: Option<Artifact>,
    dependencies: Vec<Artifact>,
    direct_dependencies: Vec<PackageName>,
    transitive_dependencies: HashMap<PackageName, Vec<PackageName>>,
}

impl DependencyGraph {
    pub fn new(
        root: Option<Artifact>,
        dependencies: Vec<Artifact>,
        direct_dependencies: Vec<PackageName>,
        transitive_dependencies: HashMap<PackageName, Vec<PackageName>>,
    ) -> Self {
        Self {
            root,
            dependencies,
            direct_dependencies,
            transitive_dependencies,
        }
    }

    /// The project's own locked package, when it appears in the lockfile
    pub fn root(&self) -> Option<&Artifact> {
        self.root.as_ref()
    }

    /// Every dependency of the project, excluding the project itself
    pub fn all_dependencies(&self) -> &[Artifact] {
        &self.dependencies
    }

    pub fn direct_dependencies(&self) -> &[PackageName] {
        &self.direct_dependencies
    }

    pub fn total_dependency_count(&self) -> usize {
        self.dependencies.len()
    }

    pub fn direct_dependency_count(&self) -> usize {
        self.direct_dependencies.len()
    }

    pub fn transitive_dependency_count(&self) -> usize {
        self.transitive_dependencies.values().map(|v| v.len()).sum()
    }
}
