/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod artifact_resolver;
pub mod formatter;
pub mod lockfile_reader;
pub mod metadata_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_config_reader;

pub use artifact_resolver::ArtifactResolver;
pub use formatter::ReportFormatter;
pub use lockfile_reader::{LockfileParseResult, LockfileReader};
pub use metadata_repository::{ProjectMetadataRepository, ReleaseMetadata};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_config_reader::ProjectConfigReader;
