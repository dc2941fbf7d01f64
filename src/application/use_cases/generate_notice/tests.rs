use super::*;
use crate::application::dto::OutputFormat;
use crate::notice_generation::domain::{LicenseEntry, UNKNOWN_TAG};
use async_trait::async_trait;
use std::cell::RefCell;

// Mock implementations for testing
struct MockSource {
    packages: Vec<(String, Package)>,
    /// Ids listed by the source but never returned by `get_package`
    phantom_ids: Vec<String>,
}

impl MockSource {
    fn new(packages: Vec<Package>) -> Self {
        Self {
            packages: packages
                .into_iter()
                .map(|p| (format!("{}@{}", p.name(), p.version()), p))
                .collect(),
            phantom_ids: Vec::new(),
        }
    }
}

#[async_trait]
impl MetadataSource for MockSource {
    async fn list_packages(&self) -> Result<Vec<String>> {
        Ok(self
            .packages
            .iter()
            .map(|(id, _)| id.clone())
            .chain(self.phantom_ids.iter().cloned())
            .collect())
    }

    async fn get_package(&self, id: &str) -> Result<Option<Package>> {
        Ok(self
            .packages
            .iter()
            .find(|(pkg_id, _)| pkg_id == id)
            .map(|(_, p)| p.clone()))
    }
}

struct FailingSource;

#[async_trait]
impl MetadataSource for FailingSource {
    async fn list_packages(&self) -> Result<Vec<String>> {
        anyhow::bail!("registry unavailable")
    }

    async fn get_package(&self, _id: &str) -> Result<Option<Package>> {
        Ok(None)
    }
}

struct MockDictionary;

impl LicenseDictionary for MockDictionary {
    fn get(&self, name: &str) -> Option<LicenseEntry> {
        match name {
            "MIT" => Some(LicenseEntry::new("MIT License", vec!["permissive".to_string()])),
            "GPL-3.0-only" => Some(LicenseEntry::new("", vec!["strong-copyleft".to_string()])),
            _ => None,
        }
    }
}

#[derive(Default)]
struct RecordingReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    progress: RefCell<Vec<(usize, usize)>>,
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.progress.borrow_mut().push((current, total));
    }

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("serde", "1.0.200").with_license("MIT"),
        Package::new("anyhow", "1.0.80").with_license("MIT"),
        Package::new("readline", "8.2").with_license("GPL-3.0-only"),
        Package::new("acme-internal", "0.1.0"),
    ]
}

fn use_case(
    packages: Vec<Package>,
) -> GenerateNoticeUseCase<MockSource, MockDictionary, RecordingReporter> {
    GenerateNoticeUseCase::new(
        MockSource::new(packages),
        MockDictionary,
        RecordingReporter::default(),
    )
}

#[tokio::test]
async fn test_execute_groups_packages_into_buckets() {
    let use_case = use_case(sample_packages());

    let response = use_case
        .execute(NoticeRequest::new(OutputFormat::Text, vec![]))
        .await
        .unwrap();

    assert_eq!(response.package_count, 4);
    assert_eq!(response.bucket_count, 3);
    assert_eq!(response.unknown_license_count, 1);
    assert!(response.has_unknown_licenses());

    // packages are sorted within the MIT bucket
    let doc = &response.document;
    assert!(doc.contains("anyhow 1.0.80, serde 1.0.200"));
    assert!(doc.contains("MIT License"));
    // the dictionary has no GPL text, so the license name stands in
    assert!(doc.contains("readline 8.2. This software contains"));
    // the unknown bucket renders last
    assert!(doc.find("acme-internal").unwrap() > doc.find("readline").unwrap());
}

#[tokio::test]
async fn test_execute_summary_tags() {
    let use_case = use_case(sample_packages());

    let response = use_case
        .execute(NoticeRequest::default())
        .await
        .unwrap();

    let summary = &response.summary;
    assert_eq!(summary.used_licenses.len(), 3);
    assert_eq!(summary.buckets_tagged("permissive").len(), 1);
    assert_eq!(summary.buckets_tagged("strong-copyleft").len(), 1);
    assert_eq!(summary.buckets_tagged(UNKNOWN_TAG).len(), 1);
    assert!(summary.buckets_tagged(UNKNOWN_TAG)[0].starts_with('~'));
}

#[tokio::test]
async fn test_execute_reports_progress_per_package() {
    let use_case = use_case(sample_packages());
    use_case.execute(NoticeRequest::default()).await.unwrap();

    let progress = use_case.progress_reporter.progress.borrow();
    assert_eq!(*progress, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);

    let messages = use_case.progress_reporter.messages.borrow();
    assert!(messages.iter().any(|m| m.contains("Detected 4 package(s)")));
    assert!(messages
        .iter()
        .any(|m| m.contains("Grouped 4 package(s) into 3 license bucket(s)")));
}

#[tokio::test]
async fn test_execute_with_exclusions() {
    let use_case = use_case(sample_packages());

    let response = use_case
        .execute(NoticeRequest::new(
            OutputFormat::Text,
            vec!["*-internal".to_string(), "left-pad".to_string()],
        ))
        .await
        .unwrap();

    assert_eq!(response.package_count, 3);
    assert_eq!(response.unknown_license_count, 0);
    assert!(!response.document.contains("acme-internal"));

    let messages = use_case.progress_reporter.messages.borrow();
    assert!(messages
        .iter()
        .any(|m| m.contains("Excluded 1 package(s) based on filters")));
    let errors = use_case.progress_reporter.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("'left-pad' did not match any package"));
}

#[tokio::test]
async fn test_execute_all_packages_excluded() {
    let use_case = use_case(vec![Package::new("acme-core", "1.0.0")]);

    let err = use_case
        .execute(NoticeRequest::new(
            OutputFormat::Text,
            vec!["acme-*".to_string()],
        ))
        .await
        .unwrap_err();

    assert!(err
        .to_string()
        .contains("All 1 package(s) were excluded by the provided filters"));
}

#[tokio::test]
async fn test_execute_invalid_exclusion_pattern() {
    let use_case = use_case(sample_packages());

    let err = use_case
        .execute(NoticeRequest::new(OutputFormat::Text, vec!["***".to_string()]))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<NoticeError>(),
        Some(NoticeError::Validation { .. })
    ));
}

#[tokio::test]
async fn test_execute_missing_listed_package() {
    let mut source = MockSource::new(vec![Package::new("serde", "1.0.0")]);
    source.phantom_ids.push("ghost@0.0.0".to_string());
    let use_case = GenerateNoticeUseCase::new(source, MockDictionary, RecordingReporter::default());

    let err = use_case
        .execute(NoticeRequest::default())
        .await
        .unwrap_err();

    match err.downcast_ref::<NoticeError>() {
        Some(NoticeError::PackageNotFound { id }) => assert_eq!(id, "ghost@0.0.0"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_execute_source_failure_propagates() {
    let use_case =
        GenerateNoticeUseCase::new(FailingSource, MockDictionary, RecordingReporter::default());

    let err = use_case
        .execute(NoticeRequest::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("registry unavailable"));
}

#[tokio::test]
async fn test_execute_empty_source() {
    let use_case = use_case(vec![]);

    let response = use_case
        .execute(NoticeRequest::new(OutputFormat::Json, vec![]))
        .await
        .unwrap();

    assert_eq!(response.bucket_count, 0);
    assert!(!response.has_unknown_licenses());
    let json: serde_json::Value = serde_json::from_str(&response.document).unwrap();
    assert_eq!(json["licenses"], serde_json::json!([]));
}

#[tokio::test]
async fn test_execute_markdown_format() {
    let use_case = use_case(sample_packages());

    let response = use_case
        .execute(NoticeRequest::new(OutputFormat::Markdown, vec![]))
        .await
        .unwrap();

    assert!(response.document.starts_with("# Third-Party Notices"));
    assert!(response.document.contains("## MIT"));
    assert!(response.document.contains("⚠️ needs review"));
}

#[tokio::test]
async fn test_execute_assigns_uuids_once() {
    let use_case = use_case(vec![
        Package::new("serde", "1.0.0").with_license("MIT").with_uuid("fixed"),
        Package::new("tokio", "1.0.0").with_license("MIT"),
    ]);

    let response = use_case
        .execute(NoticeRequest::new(OutputFormat::Json, vec![]))
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&response.document).unwrap();
    let packages = json["licenses"][0]["packages"].as_array().unwrap();
    assert_eq!(packages[0]["uuid"], "fixed");
    assert_eq!(packages[1]["uuid"].as_str().unwrap().len(), 36);
}

#[tokio::test]
async fn test_collected_packages_serve_only_included_ids() {
    let mut collected = CollectedPackages::default();
    collected.include("b@1".to_string(), Package::new("b", "1"));
    collected.include("a@1".to_string(), Package::new("a", "1"));
    collected.excluded = 1;

    assert_eq!(collected.list_packages().await.unwrap(), vec!["b@1", "a@1"]);
    let a = collected.get_package("a@1").await.unwrap().unwrap();
    assert_eq!(a.name(), "a");
    assert!(collected.get_package("excluded@1").await.unwrap().is_none());
}
