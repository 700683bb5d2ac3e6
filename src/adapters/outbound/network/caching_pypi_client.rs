use super::pypi_client::{PyPiRelease, ReleaseIndex};
use crate::dependency_report::domain::{DistributionFile, Package};
use crate::ports::outbound::{ArtifactResolver, ProjectMetadataRepository, ReleaseMetadata};
use crate::shared::error::ResolutionError;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for release documents
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    package_name: String,
    version: String,
}

impl CacheKey {
    fn new(package_name: &str, version: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            version: version.to_string(),
        }
    }
}

/// CachingPyPiClient wraps a ReleaseIndex and adds in-memory caching.
///
/// Resolving an artifact and fetching its metadata read the same release
/// document, so each release is requested once. Only successful lookups
/// are cached. Clones share the cache.
pub struct CachingPyPiClient<I: ReleaseIndex> {
    inner: I,
    cache: Arc<DashMap<CacheKey, PyPiRelease>>,
}

impl<I: ReleaseIndex> CachingPyPiClient<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<I: ReleaseIndex + Clone> Clone for CachingPyPiClient<I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            cache: Arc::clone(&self.cache),
        }
    }
}

#[async_trait]
impl<I: ReleaseIndex> ReleaseIndex for CachingPyPiClient<I> {
    async fn fetch_release(
        &self,
        package_name: &str,
        version: &str,
    ) -> std::result::Result<PyPiRelease, ResolutionError> {
        let key = CacheKey::new(package_name, version);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let release = self.inner.fetch_release(package_name, version).await?;
        self.cache.insert(key, release.clone());

        Ok(release)
    }
}

#[async_trait]
impl<I: ReleaseIndex> ArtifactResolver for CachingPyPiClient<I> {
    async fn resolve(
        &self,
        package: &Package,
    ) -> std::result::Result<Option<DistributionFile>, ResolutionError> {
        let release = self.fetch_release(package.name(), package.version()).await?;
        Ok(release.distribution_file())
    }
}

#[async_trait]
impl<I: ReleaseIndex> ProjectMetadataRepository for CachingPyPiClient<I> {
    async fn fetch_metadata(&self, package_name: &str, version: &str) -> Result<ReleaseMetadata> {
        let release = self.fetch_release(package_name, version).await?;
        Ok(release.metadata())
    }
}
