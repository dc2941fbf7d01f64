use crate::notice_generation::domain::NoticeSummary;

/// NoticeResponse - Response DTO from the notice generation use case
#[derive(Debug, Clone)]
pub struct NoticeResponse {
    /// Rendered notice document
    pub document: String,
    /// Machine-readable projection of the buckets
    pub summary: NoticeSummary,
    pub bucket_count: usize,
    pub package_count: usize,
    /// Number of buckets whose license could not be resolved
    /// Used to determine the exit code with `--deny-unknown`
    pub unknown_license_count: usize,
}

impl NoticeResponse {
    /// True when at least one bucket needs human review
    pub fn has_unknown_licenses(&self) -> bool {
        self.unknown_license_count > 0
    }
}
