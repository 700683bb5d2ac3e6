/// Network adapters for the package index
mod caching_pypi_client;
mod pypi_client;

pub use caching_pypi_client::CachingPyPiClient;
pub use pypi_client::{PyPiClient, PyPiRelease, ReleaseIndex, DEFAULT_INDEX_URL};
