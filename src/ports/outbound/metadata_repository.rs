use crate::dependency_report::domain::LicenseInfo;
use crate::dependency_report::policies::{LicensePolicy, RawLicenseFields};
use crate::shared::Result;
use async_trait::async_trait;

/// Release metadata as published by the package index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseMetadata {
    /// Display name (e.g. `PyYAML` for the locked `pyyaml`)
    pub name: Option<String>,
    pub summary: Option<String>,
    pub license_fields: RawLicenseFields,
}

/// ProjectMetadataRepository port for fetching release metadata
///
/// This port abstracts the external data source (e.g., PyPI API)
/// used to retrieve display name, licenses and description of a release.
///
/// Implementations must be `Send + Sync` so they can be shared with the
/// async runtime.
#[async_trait]
pub trait ProjectMetadataRepository: Send + Sync {
    /// Fetches raw metadata for a specific package version
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The API returns an error status code
    /// - The response cannot be parsed
    async fn fetch_metadata(&self, package_name: &str, version: &str) -> Result<ReleaseMetadata>;

    /// Fetches metadata and applies the license policy to it
    async fn project_metadata(&self, package_name: &str, version: &str) -> Result<LicenseInfo> {
        let metadata = self.fetch_metadata(package_name, version).await?;
        Ok(LicensePolicy::create_license_info(
            metadata.name,
            &metadata.license_fields,
            metadata.summary,
        ))
    }
}
