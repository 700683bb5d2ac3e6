//! uv-deps-csv - Dependency report tool for uv projects
//!
//! Lists the locked dependencies of a uv project, one `;`-separated line per
//! dependency: name, version, distribution file, licenses, description.
//! Dependency resolution is uv's job; this crate reads `uv.lock`, resolves
//! missing distribution files and metadata from the package index, and
//! formats the rows.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_report`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//! - **Config** (`config`): Config file loading and merging with CLI flags
//!
//! # Example
//!
//! ```no_run
//! use uv_deps_csv::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let index = CachingPyPiClient::new(PyPiClient::new(DEFAULT_INDEX_URL)?);
//!
//! let use_case = GenerateReportUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     index.clone(),
//!     index,
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case
//!     .execute(ReportRequest::new(PathBuf::from("."), true))
//!     .await?;
//!
//! let output = CsvFormatter::new().format(&response.report)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        parse_lockfile, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::CsvFormatter;
    pub use crate::adapters::outbound::network::{CachingPyPiClient, PyPiClient, DEFAULT_INDEX_URL};
    pub use crate::application::dto::{ReportRequest, ReportResponse};
    pub use crate::application::read_models::{DependencyReport, DependencyRow, SkipReason};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::dependency_report::domain::{
        Artifact, ArtifactSource, DependencyGraph, DependencyMap, DistributionFile, LicenseInfo,
        Package, PackageDependencies, PackageName, ProjectIdentity,
    };
    pub use crate::dependency_report::policies::{LicensePolicy, RawLicenseFields};
    pub use crate::dependency_report::services::DependencyAnalyzer;
    pub use crate::ports::outbound::{
        ArtifactResolver, LockfileParseResult, LockfileReader, OutputPresenter, ProgressReporter,
        ProjectConfigReader, ProjectMetadataRepository, ReleaseMetadata, ReportFormatter,
    };
    pub use crate::shared::error::ResolutionError;
    pub use crate::shared::Result;
}
