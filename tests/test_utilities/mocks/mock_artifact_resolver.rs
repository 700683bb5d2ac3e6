use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uv_deps_csv::prelude::*;

/// Mock ArtifactResolver for testing
///
/// Releases registered with `with_file` resolve to that file; every other
/// release is reported as not found. Clones share the call counter.
#[derive(Default, Clone)]
pub struct MockArtifactResolver {
    pub files: HashMap<String, String>,
    pub calls: Arc<AtomicUsize>,
}

impl MockArtifactResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, package: &str, version: &str, file_name: &str) -> Self {
        self.files
            .insert(format!("{}=={}", package, version), file_name.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArtifactResolver for MockArtifactResolver {
    async fn resolve(
        &self,
        package: &Package,
    ) -> std::result::Result<Option<DistributionFile>, ResolutionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.files.get(&package.id()) {
            Some(file_name) => Ok(Some(DistributionFile::new(file_name.clone(), None))),
            None => Err(ResolutionError::NotFound {
                package: package.name().to_string(),
                version: package.version().to_string(),
            }),
        }
    }
}
