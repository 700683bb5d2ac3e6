/// Domain layer for dependency reports: pure models, policies and services
/// with no I/O
pub mod domain;
pub mod policies;
pub mod services;
