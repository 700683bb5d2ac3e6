use crate::dependency_report::domain::{DistributionFile, Package};
use crate::dependency_report::policies::RawLicenseFields;
use crate::ports::outbound::{ArtifactResolver, ProjectMetadataRepository, ReleaseMetadata};
use crate::shared::error::ResolutionError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Index queried when none is configured
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org";

/// A release document of the PyPI JSON API (`/pypi/{name}/{version}/json`)
#[derive(Debug, Clone, Deserialize)]
pub struct PyPiRelease {
    info: PyPiInfo,
    #[serde(default)]
    urls: Vec<PyPiReleaseFile>,
}

#[derive(Debug, Clone, Deserialize)]
struct PyPiInfo {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    license_expression: Option<String>,
    #[serde(default)]
    classifiers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PyPiReleaseFile {
    filename: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    packagetype: Option<String>,
}

impl PyPiReleaseFile {
    fn is_wheel(&self) -> bool {
        self.packagetype.as_deref() == Some("bdist_wheel") || self.filename.ends_with(".whl")
    }

    fn to_distribution_file(&self) -> DistributionFile {
        DistributionFile::new(self.filename.clone(), self.url.clone())
    }
}

impl PyPiRelease {
    /// Picks the file to report for this release, `None` when nothing is published
    pub fn distribution_file(&self) -> Option<DistributionFile> {
        let wheels = self
            .urls
            .iter()
            .filter(|f| f.is_wheel())
            .map(PyPiReleaseFile::to_distribution_file)
            .collect();
        let sdist = self
            .urls
            .iter()
            .find(|f| !f.is_wheel())
            .map(PyPiReleaseFile::to_distribution_file);

        DistributionFile::select(wheels, sdist)
    }

    pub fn metadata(&self) -> ReleaseMetadata {
        ReleaseMetadata {
            name: self.info.name.clone(),
            summary: self.info.summary.clone(),
            license_fields: RawLicenseFields {
                license: self.info.license.clone(),
                license_expression: self.info.license_expression.clone(),
                classifiers: self.info.classifiers.clone(),
            },
        }
    }
}

/// Source of release documents, implemented by the HTTP client and its cache
#[async_trait]
pub trait ReleaseIndex: Send + Sync {
    async fn fetch_release(
        &self,
        package_name: &str,
        version: &str,
    ) -> std::result::Result<PyPiRelease, ResolutionError>;
}

/// PyPiClient adapter for the PyPI JSON API
///
/// Resolves distribution files and fetches release metadata. Both come from
/// the same release document; wrap the client in `CachingPyPiClient` so a
/// release is requested only once.
#[derive(Clone)]
pub struct PyPiClient {
    client: reqwest::Client,
    index_url: String,
    max_retries: u32,
}

impl PyPiClient {
    /// Creates a client for `index_url` (e.g. `https://pypi.org`)
    pub fn new(index_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("uv-deps-csv/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            index_url: index_url.trim_end_matches('/').to_string(),
            max_retries: 3,
        })
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Validates a package name or version before it becomes part of a URL
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    fn release_url(&self, package_name: &str, version: &str) -> String {
        format!(
            "{}/pypi/{}/{}/json",
            self.index_url,
            urlencoding::encode(package_name),
            urlencoding::encode(version)
        )
    }

    async fn fetch_once(
        &self,
        package_name: &str,
        version: &str,
    ) -> std::result::Result<PyPiRelease, ResolutionError> {
        let failed = |details: String| ResolutionError::Failed {
            package: package_name.to_string(),
            version: version.to_string(),
            details,
        };

        let url = self.release_url(package_name, version);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ResolutionError::NotFound {
                package: package_name.to_string(),
                version: version.to_string(),
            });
        }
        if !status.is_success() {
            return Err(failed(format!("package index returned status code {}", status)));
        }

        response
            .json::<PyPiRelease>()
            .await
            .map_err(|e| failed(format!("invalid release document: {}", e)))
    }
}

#[async_trait]
impl ReleaseIndex for PyPiClient {
    /// Fetches a release document, retrying transient failures with a
    /// linear backoff. A missing release is reported at once.
    async fn fetch_release(
        &self,
        package_name: &str,
        version: &str,
    ) -> std::result::Result<PyPiRelease, ResolutionError> {
        Self::validate_url_component(package_name, "Package name")
            .and_then(|_| Self::validate_url_component(version, "Version"))
            .map_err(|e| ResolutionError::Failed {
                package: package_name.to_string(),
                version: version.to_string(),
                details: e.to_string(),
            })?;

        let mut attempt = 1;
        loop {
            match self.fetch_once(package_name, version).await {
                Err(ResolutionError::Failed { details, .. }) if attempt < self.max_retries => {
                    tracing::debug!(
                        package = package_name,
                        version,
                        attempt,
                        %details,
                        "retrying package index request"
                    );
                    tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

#[async_trait]
impl ArtifactResolver for PyPiClient {
    async fn resolve(
        &self,
        package: &Package,
    ) -> std::result::Result<Option<DistributionFile>, ResolutionError> {
        let release = self.fetch_release(package.name(), package.version()).await?;
        Ok(release.distribution_file())
    }
}

#[async_trait]
impl ProjectMetadataRepository for PyPiClient {
    async fn fetch_metadata(&self, package_name: &str, version: &str) -> Result<ReleaseMetadata> {
        let release = self.fetch_release(package_name, version).await?;
        Ok(release.metadata())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASE_JSON: &str = r#"{
        "info": {
            "name": "PyYAML",
            "summary": "YAML parser and emitter for Python",
            "license": "MIT",
            "license_expression": null,
            "classifiers": [
                "License :: OSI Approved :: MIT License",
                "Programming Language :: Python :: 3"
            ]
        },
        "urls": [
            {
                "filename": "PyYAML-6.0.1-cp311-cp311-manylinux_2_17_x86_64.whl",
                "url": "https://files.pythonhosted.org/packages/7b/PyYAML-6.0.1-cp311-cp311-manylinux_2_17_x86_64.whl",
                "packagetype": "bdist_wheel"
            },
            {
                "filename": "PyYAML-6.0.1.tar.gz",
                "url": "https://files.pythonhosted.org/packages/cd/PyYAML-6.0.1.tar.gz",
                "packagetype": "sdist"
            }
        ]
    }"#;

    #[test]
    fn test_pypi_client_creation() {
        let client = PyPiClient::new(DEFAULT_INDEX_URL);
        assert!(client.is_ok());
    }

    #[test]
    fn test_release_url_encodes_components() {
        let client = PyPiClient::new("https://pypi.example.org/").unwrap();
        assert_eq!(
            client.release_url("requests", "2.31.0"),
            "https://pypi.example.org/pypi/requests/2.31.0/json"
        );
        assert_eq!(
            client.release_url("pkg", "1.0+local"),
            "https://pypi.example.org/pypi/pkg/1.0%2Blocal/json"
        );
    }

    #[test]
    fn test_validate_url_component() {
        assert!(PyPiClient::validate_url_component("requests", "Package name").is_ok());
        assert!(PyPiClient::validate_url_component("2.31.0", "Version").is_ok());
        assert!(PyPiClient::validate_url_component("../etc", "Package name").is_err());
        assert!(PyPiClient::validate_url_component("a/b", "Package name").is_err());
        assert!(PyPiClient::validate_url_component("a\\b", "Package name").is_err());
        assert!(PyPiClient::validate_url_component("1.0#frag", "Version").is_err());
        assert!(PyPiClient::validate_url_component("user@host", "Package name").is_err());
    }

    #[test]
    fn test_release_metadata() {
        let release: PyPiRelease = serde_json::from_str(RELEASE_JSON).unwrap();
        let metadata = release.metadata();

        assert_eq!(metadata.name.as_deref(), Some("PyYAML"));
        assert_eq!(
            metadata.summary.as_deref(),
            Some("YAML parser and emitter for Python")
        );
        assert_eq!(metadata.license_fields.license.as_deref(), Some("MIT"));
        assert_eq!(metadata.license_fields.license_expression, None);
        assert_eq!(metadata.license_fields.classifiers.len(), 2);
    }

    #[test]
    fn test_release_distribution_file_prefers_wheel() {
        let release: PyPiRelease = serde_json::from_str(RELEASE_JSON).unwrap();
        let file = release.distribution_file().unwrap();
        assert_eq!(
            file.file_name(),
            "PyYAML-6.0.1-cp311-cp311-manylinux_2_17_x86_64.whl"
        );
        assert!(file.location().unwrap().starts_with("https://"));
    }

    #[test]
    fn test_release_distribution_file_sdist_only() {
        let release: PyPiRelease = serde_json::from_str(
            r#"{"info": {}, "urls": [{"filename": "pkg-1.0.tar.gz", "packagetype": "sdist"}]}"#,
        )
        .unwrap();
        assert_eq!(
            release.distribution_file().map(|f| f.file_name().to_string()),
            Some("pkg-1.0.tar.gz".to_string())
        );
    }

    #[test]
    fn test_release_without_files() {
        let release: PyPiRelease = serde_json::from_str(r#"{"info": {"name": "pkg"}}"#).unwrap();
        assert!(release.distribution_file().is_none());
    }

    #[tokio::test]
    async fn test_fetch_release_rejects_unsafe_name() {
        let client = PyPiClient::new(DEFAULT_INDEX_URL).unwrap();
        let result = client.fetch_release("../admin", "1.0").await;
        assert!(matches!(result, Err(ResolutionError::Failed { .. })));
    }

    #[tokio::test]
    async fn test_fetch_release_unreachable_index_is_failure() {
        let client = PyPiClient::new("http://127.0.0.1:9")
            .unwrap()
            .with_max_retries(1);
        let result = client.fetch_release("requests", "2.31.0").await;
        assert!(matches!(result, Err(ResolutionError::Failed { .. })));
    }
}
