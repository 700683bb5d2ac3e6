/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe the infrastructure the use case needs:
/// lockfile and project readers, the package index, formatting and output.
pub mod outbound;
