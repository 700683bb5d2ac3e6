/// Read models: the data formatters consume
mod dependency_report;

pub use dependency_report::{DependencyReport, DependencyRow, SkipReason, SkippedArtifact};
