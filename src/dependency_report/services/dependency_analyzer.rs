use crate::dependency_report::domain::{
    Artifact, DependencyGraph, DependencyMap, DependencyScope, PackageName,
};
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// DependencyAnalyzer service: turns the locked packages into the project's
/// dependency graph.
///
/// This service contains pure business logic for dependency graph analysis.
/// It has no I/O dependencies and works only with domain objects.
pub struct DependencyAnalyzer;

impl DependencyAnalyzer {
    /// Maximum recursion depth to prevent stack overflow on malicious lockfiles
    const MAX_RECURSION_DEPTH: usize = 100;

    /// Builds the dependency graph of `project_name` from the locked packages
    ///
    /// # Arguments
    /// * `project_name` - The root project, if known
    /// * `artifacts` - Every package in the lockfile
    /// * `dependency_map` - Outgoing edges per locked package name
    /// * `include_dev` - Whether dev-only dependencies are part of the graph
    ///
    /// # Returns
    /// A DependencyGraph whose dependencies exclude the root project itself.
    /// When the root is unknown or not locked, every locked package is a
    /// runtime dependency.
    pub fn analyze(
        project_name: Option<&PackageName>,
        artifacts: Vec<Artifact>,
        dependency_map: &DependencyMap,
        include_dev: bool,
    ) -> Result<DependencyGraph> {
        let root_name = project_name
            .map(PackageName::normalized)
            .filter(|root| artifacts.iter().any(|a| a.package().package_name().normalized() == *root));

        let Some(root_name) = root_name else {
            if let Some(name) = project_name {
                tracing::warn!(
                    project = %name,
                    "project is not part of the lockfile; listing every locked package"
                );
            }
            return Ok(DependencyGraph::new(None, artifacts, vec![], HashMap::new()));
        };

        let root_edges = dependency_map
            .iter()
            .find(|(name, _)| Self::normalize(name) == root_name)
            .map(|(_, edges)| edges.clone())
            .unwrap_or_default();

        // Runtime closure first; the dev closure only adds what runtime did not reach
        let runtime = Self::reachable_from(root_edges.root_runtime(), dependency_map);
        let dev = if include_dev {
            Self::reachable_from(&root_edges.dev, dependency_map)
        } else {
            HashSet::new()
        };

        let direct_names: Vec<&String> = if include_dev {
            root_edges.all().collect()
        } else {
            root_edges.root_runtime().collect()
        };
        let (direct_dependencies, transitive_dependencies) =
            Self::direct_and_transitive(&direct_names, dependency_map)?;

        // A project may also be locked as a dependency of itself (another
        // release reached through a cycle); only the project's own entry is the root
        let is_root_name = |a: &Artifact| a.package().package_name().normalized() == root_name;
        let root_index = artifacts
            .iter()
            .position(|a| is_root_name(a) && a.source().is_local())
            .or_else(|| artifacts.iter().position(is_root_name));

        let mut root = None;
        let mut dependencies = Vec::new();
        for (index, artifact) in artifacts.into_iter().enumerate() {
            if Some(index) == root_index {
                root = Some(artifact);
                continue;
            }
            let name = artifact.package().package_name().normalized();
            if runtime.contains(&name) {
                dependencies.push(artifact.with_scope(DependencyScope::Runtime));
            } else if dev.contains(&name) {
                dependencies.push(artifact.with_scope(DependencyScope::Dev));
            }
        }

        Ok(DependencyGraph::new(
            root,
            dependencies,
            direct_dependencies,
            transitive_dependencies,
        ))
    }

    fn normalize(name: &str) -> String {
        PackageName::new(name.to_string())
            .map(|n| n.normalized())
            .unwrap_or_else(|_| name.to_lowercase())
    }

    /// Normalized names of every package reachable from `start`
    fn reachable_from<'a>(
        start: impl IntoIterator<Item = &'a String>,
        dependency_map: &DependencyMap,
    ) -> HashSet<String> {
        let mut depths = HashMap::new();
        for dep in start {
            Self::collect_reachable(dep, dependency_map, &mut depths, 0);
        }
        depths.into_keys().collect()
    }

    /// Records `package_name` and everything reachable from it in `depths`
    /// (normalized name to shallowest depth seen). A package reached again
    /// at a smaller depth is expanded again, so the depth limit only cuts
    /// chains that are long from every path. Only runtime edges are
    /// followed past the root.
    fn collect_reachable(
        package_name: &str,
        dependency_map: &DependencyMap,
        depths: &mut HashMap<String, usize>,
        depth: usize,
    ) {
        if depth >= Self::MAX_RECURSION_DEPTH {
            tracing::warn!(
                package = package_name,
                max_depth = Self::MAX_RECURSION_DEPTH,
                "maximum dependency depth reached; dependency chain may be truncated"
            );
            return;
        }

        let key = Self::normalize(package_name);
        if depths.get(&key).is_some_and(|&seen| seen <= depth) {
            return;
        }
        depths.insert(key, depth);

        if let Some(edges) = dependency_map.get(package_name) {
            for dep in &edges.runtime {
                Self::collect_reachable(dep, dependency_map, depths, depth + 1);
            }
        }
    }

    /// Direct dependency names and, per direct dependency, the packages it
    /// pulls in that are not themselves direct dependencies
    fn direct_and_transitive(
        direct: &[&String],
        dependency_map: &DependencyMap,
    ) -> Result<(Vec<PackageName>, HashMap<PackageName, Vec<PackageName>>)> {
        let direct_set: HashSet<String> = direct.iter().map(|d| Self::normalize(d)).collect();
        let mut direct_names = Vec::new();
        let mut transitive = HashMap::new();

        for dep in direct {
            let name = PackageName::new((*dep).clone())?;
            if direct_names.contains(&name) {
                continue;
            }

            let reached = Self::reachable_from([*dep], dependency_map);
            let mut trans: Vec<String> = reached
                .into_iter()
                .filter(|n| !direct_set.contains(n))
                .collect();
            trans.sort();

            if !trans.is_empty() {
                let trans_names = trans
                    .into_iter()
                    .map(PackageName::new)
                    .collect::<Result<Vec<_>>>()?;
                transitive.insert(name.clone(), trans_names);
            }
            direct_names.push(name);
        }

        Ok((direct_names, transitive))
    }
}
