/// Mock implementations for testing
mod mock_artifact_resolver;
mod mock_lockfile_reader;
mod mock_metadata_repository;
mod mock_progress_reporter;
mod mock_project_config_reader;

pub use mock_artifact_resolver::MockArtifactResolver;
pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_metadata_repository::MockMetadataRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_config_reader::MockProjectConfigReader;
