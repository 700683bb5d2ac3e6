pub mod artifact;
pub mod dependency_graph;
pub mod license_info;
pub mod package;
pub mod project_identity;

pub use artifact::{Artifact, ArtifactSource, DependencyScope, DistributionFile};
pub use dependency_graph::{DependencyGraph, DependencyMap, PackageDependencies};
pub use license_info::LicenseInfo;
pub use package::{Package, PackageName, Version};
pub use project_identity::ProjectIdentity;
