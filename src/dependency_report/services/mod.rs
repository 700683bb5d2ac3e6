mod dependency_analyzer;

pub use dependency_analyzer::DependencyAnalyzer;
