use async_trait::async_trait;
use noticegen::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock MetadataSource serving packages from memory
///
/// Ids are `name@version` in insertion order.
#[derive(Default)]
pub struct MockMetadataSource {
    packages: Vec<(String, Package)>,
    missing_ids: Vec<String>,
    should_fail: bool,
    fetch_count: AtomicUsize,
}

impl MockMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: Package) -> Self {
        let id = format!("{}@{}", package.name(), package.version());
        self.packages.push((id, package));
        self
    }

    /// Adds a licensed package
    pub fn with_license(self, name: &str, version: &str, license: &str) -> Self {
        self.with_package(Package::new(name, version).with_license(license))
    }

    /// Lists an id that `get_package` cannot resolve
    pub fn with_missing_id(mut self, id: &str) -> Self {
        self.missing_ids.push(id.to_string());
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataSource for MockMetadataSource {
    async fn list_packages(&self) -> Result<Vec<String>> {
        if self.should_fail {
            anyhow::bail!("Mock metadata source failure");
        }
        Ok(self
            .packages
            .iter()
            .map(|(id, _)| id.clone())
            .chain(self.missing_ids.iter().cloned())
            .collect())
    }

    async fn get_package(&self, id: &str) -> Result<Option<Package>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .packages
            .iter()
            .find(|(pkg_id, _)| pkg_id == id)
            .map(|(_, package)| package.clone()))
    }
}
