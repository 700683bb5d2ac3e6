use crate::dependency_report::domain::{DistributionFile, Package};
use crate::shared::error::ResolutionError;
use async_trait::async_trait;

/// ArtifactResolver port for locating the distribution file of a locked package
///
/// Used only for artifacts whose lockfile entry names no file.
#[async_trait]
pub trait ArtifactResolver: Send + Sync {
    /// Resolves the distribution file of `package`
    ///
    /// # Returns
    /// `Ok(None)` when the release exists but publishes no file.
    ///
    /// # Errors
    /// `ResolutionError::NotFound` when the index has no such release,
    /// `ResolutionError::Failed` for every other failure.
    async fn resolve(
        &self,
        package: &Package,
    ) -> std::result::Result<Option<DistributionFile>, ResolutionError>;
}
