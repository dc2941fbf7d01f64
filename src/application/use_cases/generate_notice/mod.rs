use crate::application::dto::{NoticeRequest, NoticeResponse};
use crate::application::factories::RendererFactory;
use crate::notice_generation::domain::Package;
use crate::notice_generation::services::{NoticeBuilder, PackageFilter};
use crate::ports::outbound::{LicenseDictionary, MetadataSource, OutputRenderer, ProgressReporter};
use crate::shared::error::NoticeError;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// GenerateNoticeUseCase - Core use case for notice generation
///
/// Drains the metadata source, drops excluded packages, reads the rest
/// into the bucketing engine and renders the notice in the requested
/// format.
///
/// # Type Parameters
/// * `S` - MetadataSource implementation
/// * `D` - LicenseDictionary implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateNoticeUseCase<S, D, PR> {
    source: S,
    dictionary: D,
    progress_reporter: PR,
}

impl<S, D, PR> GenerateNoticeUseCase<S, D, PR>
where
    S: MetadataSource,
    D: LicenseDictionary,
    PR: ProgressReporter,
{
    /// Creates a new GenerateNoticeUseCase with injected dependencies
    pub fn new(source: S, dictionary: D, progress_reporter: PR) -> Self {
        Self {
            source,
            dictionary,
            progress_reporter,
        }
    }

    /// Executes the notice generation use case
    ///
    /// # Errors
    /// Returns an error if:
    /// - An exclusion pattern is invalid
    /// - The metadata source fails or cannot produce a listed package
    /// - Every package was excluded
    /// - Rendering fails
    pub async fn execute(&self, request: NoticeRequest) -> Result<NoticeResponse> {
        let filter = PackageFilter::new(request.exclude_patterns.clone())?;

        // Step 1: Collect packages from the source
        let packages = self.collect_packages(&filter).await?;

        // Step 2: Report exclusions
        self.report_exclusions(&filter, &packages)?;

        // Step 3: Bucket and render
        self.progress_reporter
            .report(RendererFactory::progress_message(request.format));
        let mut builder =
            NoticeBuilder::new(RendererFactory::create(request.format), &self.dictionary);
        builder.read(&packages).await?;

        self.build_response(&mut builder)
    }

    /// Lists and fetches every package, keeping those the filter lets through
    async fn collect_packages(&self, filter: &PackageFilter) -> Result<CollectedPackages> {
        self.progress_reporter
            .report("📖 Loading package metadata...");

        let ids = self.source.list_packages().await?;
        let total = ids.len();
        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", total));

        let mut collected = CollectedPackages::default();
        for (i, id) in ids.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(i + 1, total, Some(&id));

            let package = self
                .source
                .get_package(&id)
                .await?
                .ok_or_else(|| NoticeError::PackageNotFound { id: id.clone() })?;

            if filter.excludes(&package) {
                collected.excluded += 1;
            } else {
                collected.include(id, package);
            }
        }

        Ok(collected)
    }

    /// Reports the exclusion outcome
    ///
    /// # Errors
    /// Returns an error if packages were listed but all of them were excluded
    fn report_exclusions(&self, filter: &PackageFilter, packages: &CollectedPackages) -> Result<()> {
        if filter.is_empty() {
            return Ok(());
        }

        if packages.excluded > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} package(s) based on filters",
                packages.excluded
            ));
        }

        if packages.ids.is_empty() && packages.excluded > 0 {
            anyhow::bail!(
                "All {} package(s) were excluded by the provided filters. \
                 The notice would be empty. Please adjust your exclusion patterns.",
                packages.excluded
            );
        }

        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any package.",
                pattern
            ));
        }

        Ok(())
    }

    fn build_response<R>(&self, builder: &mut NoticeBuilder<R, &D>) -> Result<NoticeResponse>
    where
        R: OutputRenderer<Output = String>,
    {
        let document = builder.build()?;
        let response = NoticeResponse {
            document,
            summary: builder.summary(),
            bucket_count: builder.len(),
            package_count: builder.package_count(),
            unknown_license_count: builder.unknown_bucket_count(),
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Grouped {} package(s) into {} license bucket(s)",
            response.package_count, response.bucket_count
        ));
        if response.has_unknown_licenses() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} license bucket(s) could not be resolved and need review.",
                response.unknown_license_count
            ));
        }

        Ok(response)
    }
}

/// Packages drained from the source, split by the exclusion filter
///
/// Serves the included packages back as a metadata source, so the builder
/// drains them through `NoticeBuilder::read` in source order.
#[derive(Default)]
struct CollectedPackages {
    ids: Vec<String>,
    included: HashMap<String, Package>,
    excluded: usize,
}

impl CollectedPackages {
    fn include(&mut self, id: String, package: Package) {
        self.included.entry(id.clone()).or_insert(package);
        self.ids.push(id);
    }
}

#[async_trait]
impl MetadataSource for CollectedPackages {
    async fn list_packages(&self) -> Result<Vec<String>> {
        Ok(self.ids.clone())
    }

    async fn get_package(&self, id: &str) -> Result<Option<Package>> {
        Ok(self.included.get(id).cloned())
    }
}

#[cfg(test)]
mod tests;
