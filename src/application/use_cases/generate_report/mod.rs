use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::read_models::{DependencyReport, DependencyRow, SkipReason};
use crate::dependency_report::domain::{Artifact, DependencyGraph, ProjectIdentity};
use crate::dependency_report::services::DependencyAnalyzer;
use crate::ports::outbound::{
    ArtifactResolver, LockfileReader, ProgressReporter, ProjectConfigReader,
    ProjectMetadataRepository,
};
use crate::shared::error::ResolutionError;
use crate::shared::Result;

/// GenerateReportUseCase - Core use case for the dependency report
///
/// Reads the locked dependency set, resolves artifacts that lack a
/// distribution file, sorts them and collects one row per artifact.
/// Per-artifact failures are logged and the artifact is skipped; only
/// failures that prevent reading the dependency set are returned as errors.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PCR` - ProjectConfigReader implementation
/// * `AR` - ArtifactResolver implementation
/// * `MR` - ProjectMetadataRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<LR, PCR, AR, MR, PR> {
    lockfile_reader: LR,
    project_config_reader: PCR,
    artifact_resolver: AR,
    metadata_repository: MR,
    progress_reporter: PR,
}

impl<LR, PCR, AR, MR, PR> GenerateReportUseCase<LR, PCR, AR, MR, PR>
where
    LR: LockfileReader,
    PCR: ProjectConfigReader,
    AR: ArtifactResolver,
    MR: ProjectMetadataRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(
        lockfile_reader: LR,
        project_config_reader: PCR,
        artifact_resolver: AR,
        metadata_repository: MR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            lockfile_reader,
            project_config_reader,
            artifact_resolver,
            metadata_repository,
            progress_reporter,
        }
    }

    /// Executes the dependency report use case
    ///
    /// # Errors
    /// Returns an error if the lockfile cannot be read or parsed
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let project = self.read_project_identity(&request);
        let graph = self.build_dependency_graph(&request, project.as_ref())?;

        let mut dependencies = graph.all_dependencies().to_vec();
        dependencies.sort_by(|a, b| a.package().cmp(b.package()));

        self.resolve_artifacts(&mut dependencies, project.as_ref()).await;
        let report = self.collect_rows(&dependencies, &request).await;

        Ok(ReportResponse::new(report, graph))
    }

    /// The project's identity is only needed to root the graph and to
    /// recognise the project's own release; a missing pyproject.toml is
    /// not fatal.
    fn read_project_identity(&self, request: &ReportRequest) -> Option<ProjectIdentity> {
        match self
            .project_config_reader
            .read_project_identity(&request.project_path)
        {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::warn!(
                    "Unable to read project metadata, listing every locked package: {}",
                    e
                );
                None
            }
        }
    }

    fn build_dependency_graph(
        &self,
        request: &ReportRequest,
        project: Option<&ProjectIdentity>,
    ) -> Result<DependencyGraph> {
        self.progress_reporter.report(&format!(
            "📖 Loading uv.lock file from: {}",
            request.project_path.display()
        ));

        let (artifacts, dependency_map) = self
            .lockfile_reader
            .read_and_parse_lockfile(&request.project_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", artifacts.len()));

        let graph = DependencyAnalyzer::analyze(
            project.map(ProjectIdentity::name),
            artifacts,
            &dependency_map,
            request.include_dev,
        )?;

        self.progress_reporter.report(&format!(
            "📊 {} dependencies ({} direct, {} transitive)",
            graph.total_dependency_count(),
            graph.direct_dependency_count(),
            graph.transitive_dependency_count()
        ));

        Ok(graph)
    }

    /// Resolves every artifact that has no distribution file yet.
    ///
    /// Locally sourced artifacts are skipped. Failures are logged and the
    /// artifact keeps having no file.
    async fn resolve_artifacts(
        &self,
        artifacts: &mut [Artifact],
        project: Option<&ProjectIdentity>,
    ) {
        for artifact in artifacts.iter_mut() {
            if artifact.file().is_some() || artifact.source().is_local() {
                continue;
            }

            let resolution = self.artifact_resolver.resolve(artifact.package()).await;
            match resolution {
                Ok(Some(file)) => {
                    tracing::debug!(artifact = %artifact.id(), file = file.file_name(), "resolved");
                    artifact.set_file(file);
                }
                Ok(None) => {
                    tracing::error!(
                        "Artifact {} has no file, even after resolution.",
                        artifact.id()
                    );
                }
                Err(ResolutionError::NotFound { .. })
                    if project.is_some_and(|p| p.matches(artifact.name(), artifact.version())) =>
                {
                    tracing::warn!("The artifact of this project has never been published.");
                }
                Err(e @ ResolutionError::NotFound { .. }) => {
                    tracing::error!("Artifact {} not found. ({})", artifact.id(), e);
                }
                Err(e @ ResolutionError::Failed { .. }) => {
                    tracing::error!("Artifact {} can't be resolved. ({})", artifact.id(), e);
                }
            }
        }
    }

    /// Builds one row per artifact with a file, in the given order.
    ///
    /// Requests to the index are spaced by `request.request_delay`.
    async fn collect_rows(
        &self,
        artifacts: &[Artifact],
        request: &ReportRequest,
    ) -> DependencyReport {
        self.progress_reporter
            .report("🔍 Fetching license information...");

        let mut report = DependencyReport::new();
        // Logged after the progress bar is cleared
        let mut deferred: Vec<(SkipReason, String)> = Vec::new();
        let total = artifacts.len();
        let mut fetched = 0;

        for (idx, artifact) in artifacts.iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(artifact.name()));

            if artifact.file().is_none() {
                deferred.push((
                    SkipReason::NoFile,
                    format!(
                        "Artifact {} has no file and won't be listed in dependency files details.",
                        artifact.id()
                    ),
                ));
                report.skip(artifact, SkipReason::NoFile);
                continue;
            }

            if fetched > 0 && !request.request_delay.is_zero() {
                tokio::time::sleep(request.request_delay).await;
            }
            fetched += 1;

            match self
                .metadata_repository
                .project_metadata(artifact.name(), artifact.version())
                .await
            {
                Ok(info) => {
                    if let Some(row) = DependencyRow::from_artifact(artifact, info) {
                        report.push_row(row);
                    }
                }
                Err(e) => {
                    deferred.push((
                        SkipReason::MetadataUnavailable,
                        format!(
                            "Failed to fetch project metadata for {}: {:#}",
                            artifact.id(),
                            e
                        ),
                    ));
                    report.skip(artifact, SkipReason::MetadataUnavailable);
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ License information retrieval complete: {} listed, {} skipped",
            report.rows.len(),
            report.skipped.len()
        ));

        if !report.is_complete() {
            self.progress_reporter.report_error(&format!(
                "⚠️  {} artifact(s) not listed in the report",
                report.skipped.len()
            ));
        }

        for (reason, message) in deferred {
            match reason {
                SkipReason::NoFile => tracing::warn!("{}", message),
                SkipReason::MetadataUnavailable => tracing::error!("{}", message),
            }
        }

        report
    }
}
