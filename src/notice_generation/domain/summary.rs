use indexmap::IndexMap;
use serde::Serialize;

/// Packages and tags of one bucket, as seen by the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsedLicense {
    /// `(name, version)` pairs in bucket order; serialized as two-element arrays
    pub packages: Vec<(String, String)>,
    pub tags: Vec<String>,
}

/// Machine-readable summary of the accumulated buckets
///
/// Both maps keep bucket insertion order, not the finalized sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeSummary {
    pub used_licenses: IndexMap<String, UsedLicense>,
    pub used_tags: IndexMap<String, Vec<String>>,
}

impl NoticeSummary {
    /// Bucket ids tagged with `tag`, or an empty slice
    pub fn buckets_tagged(&self, tag: &str) -> &[String] {
        self.used_tags.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }
}
