/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod report_request;
mod report_response;

pub use report_request::{ReportRequest, DEFAULT_REQUEST_DELAY};
pub use report_response::ReportResponse;
