use super::Package;
use serde::Serialize;

/// Tag carried by buckets whose license did not resolve in the dictionary
pub const UNKNOWN_TAG: &str = "unknown";

/// LicenseBucket aggregate: packages sharing one normalized license identity
///
/// `name`, `text` and `tags` are fixed by the first package that creates
/// the bucket; later packages are only appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseBucket {
    id: String,
    name: Option<String>,
    text: String,
    tags: Vec<String>,
    packages: Vec<Package>,
}

impl LicenseBucket {
    pub fn new(id: String, name: Option<String>, text: String, tags: Vec<String>) -> Self {
        Self {
            id,
            name,
            text,
            tags,
            packages: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// True when the bucket's license needs human review
    pub fn is_unknown(&self) -> bool {
        self.tags.iter().any(|t| t == UNKNOWN_TAG)
    }

    pub(crate) fn push(&mut self, package: Package) {
        self.packages.push(package);
    }

    pub(crate) fn packages_mut(&mut self) -> &mut Vec<Package> {
        &mut self.packages
    }
}
