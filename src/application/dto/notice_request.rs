use super::OutputFormat;

/// NoticeRequest - Request DTO for the notice generation use case
#[derive(Debug, Clone, Default)]
pub struct NoticeRequest {
    /// Format of the rendered document
    pub format: OutputFormat,
    /// Patterns for excluding packages from the notice
    pub exclude_patterns: Vec<String>,
}

impl NoticeRequest {
    pub fn new(format: OutputFormat, exclude_patterns: Vec<String>) -> Self {
        Self {
            format,
            exclude_patterns,
        }
    }
}
