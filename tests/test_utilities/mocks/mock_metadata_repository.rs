use async_trait::async_trait;
use std::collections::HashMap;
use uv_deps_csv::prelude::*;

/// Mock ProjectMetadataRepository for testing
pub struct MockMetadataRepository {
    pub releases: HashMap<String, ReleaseMetadata>,
    pub should_fail: bool,
}

impl MockMetadataRepository {
    pub fn new() -> Self {
        Self {
            releases: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_license(
        mut self,
        package: &str,
        version: &str,
        license: &str,
        description: &str,
    ) -> Self {
        self.releases.insert(
            format!("{}=={}", package, version),
            ReleaseMetadata {
                name: Some(package.to_string()),
                summary: Some(description.to_string()),
                license_fields: RawLicenseFields {
                    license: Some(license.to_string()),
                    ..Default::default()
                },
            },
        );
        self
    }

    pub fn with_release(mut self, package: &str, version: &str, metadata: ReleaseMetadata) -> Self {
        self.releases
            .insert(format!("{}=={}", package, version), metadata);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            releases: HashMap::new(),
            should_fail: true,
        }
    }
}

impl Default for MockMetadataRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectMetadataRepository for MockMetadataRepository {
    async fn fetch_metadata(&self, package_name: &str, version: &str) -> Result<ReleaseMetadata> {
        if self.should_fail {
            anyhow::bail!("Mock metadata repository failure");
        }

        let key = format!("{}=={}", package_name, version);
        Ok(self.releases.get(&key).cloned().unwrap_or_default())
    }
}
