use std::path::PathBuf;
use std::time::Duration;

/// Delay between consecutive metadata requests (~10 requests per second)
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// ReportRequest - request DTO for the dependency report use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Path to the project directory containing uv.lock
    pub project_path: PathBuf,
    /// Whether dev-only dependencies are listed
    pub include_dev: bool,
    /// Pause between metadata requests to the index
    pub request_delay: Duration,
}

impl ReportRequest {
    pub fn new(project_path: PathBuf, include_dev: bool) -> Self {
        Self {
            project_path,
            include_dev,
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }

    pub fn with_request_delay(mut self, request_delay: Duration) -> Self {
        self.request_delay = request_delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = ReportRequest::new(PathBuf::from("."), true);
        assert!(request.include_dev);
        assert_eq!(request.request_delay, DEFAULT_REQUEST_DELAY);
    }

    #[test]
    fn test_request_delay_override() {
        let request = ReportRequest::new(PathBuf::from("."), false)
            .with_request_delay(Duration::ZERO);
        assert_eq!(request.request_delay, Duration::ZERO);
    }
}
