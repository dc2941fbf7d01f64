use super::{license_hash, locale_compare};
use crate::notice_generation::domain::{
    LicenseBucket, NoticeSummary, Package, UsedLicense, UNKNOWN_TAG,
};
use crate::ports::outbound::{LicenseDictionary, MetadataSource, OutputRenderer};
use crate::shared::error::NoticeError;
use crate::shared::Result;
use indexmap::IndexMap;

/// NoticeBuilder groups packages into deduplicated license buckets
///
/// Each package is classified by its license name and a normalized digest
/// of its license text. Packages whose texts differ only in formatting end
/// up in the same bucket. Once everything is ingested, `build` sorts the
/// buckets and hands them to the renderer.
///
/// One builder holds the state of one build. It is not meant to be
/// mutated from several tasks at once; independent builders share nothing.
///
/// # Type Parameters
/// * `R` - OutputRenderer implementation
/// * `D` - LicenseDictionary implementation
pub struct NoticeBuilder<R, D> {
    renderer: R,
    dictionary: D,
    buckets: IndexMap<String, LicenseBucket>,
}

impl<R, D> NoticeBuilder<R, D>
where
    R: OutputRenderer,
    D: LicenseDictionary,
{
    /// Creates an empty build with injected renderer and dictionary
    pub fn new(renderer: R, dictionary: D) -> Self {
        Self {
            renderer,
            dictionary,
            buckets: IndexMap::new(),
        }
    }

    /// Adds a package to its license bucket
    ///
    /// Assigns a UUID to the package if it has none. The representative
    /// text is, in order: the package's own non-empty text, the
    /// dictionary's non-empty canonical text, the license name, or the
    /// empty string. Resolved licenses get the id `name~digest`; unknown or
    /// missing ones get `~name~digest` so they sort after known buckets.
    ///
    /// # Returns
    /// The id of the bucket the package landed in
    pub fn add_package(&mut self, package: &mut Package) -> String {
        package.ensure_uuid();

        let name = package.license().filter(|n| !n.is_empty());
        let entry = name.and_then(|n| self.dictionary.get(n));

        let text = match (package.text(), name, &entry) {
            (Some(text), _, _) if !text.is_empty() => text.to_string(),
            (_, Some(_), Some(entry)) if !entry.text().is_empty() => entry.text().to_string(),
            (_, Some(name), _) => name.to_string(),
            (_, None, _) => String::new(),
        };

        // TODO: copyright lines inside license text still split otherwise identical buckets
        let hash = license_hash(&text);

        let prefix = name.unwrap_or("");
        let id = match entry {
            Some(_) => format!("{}~{}", prefix, hash),
            None => format!("~{}~{}", prefix, hash),
        };

        let bucket = self.buckets.entry(id.clone()).or_insert_with(|| {
            let tags = match entry {
                Some(entry) => entry.tags().to_vec(),
                None => vec![UNKNOWN_TAG.to_string()],
            };
            LicenseBucket::new(id.clone(), name.map(String::from), text, tags)
        });
        bucket.push(package.clone());

        id
    }

    /// Drains a metadata source into the build
    ///
    /// Lists every package id, fetches each descriptor and adds it. A
    /// failing list or fetch aborts the read; packages added before the
    /// failure stay bucketed.
    ///
    /// # Errors
    /// Returns an error if the source fails, or if it cannot produce a
    /// package for an id it listed
    pub async fn read<S>(&mut self, source: &S) -> Result<()>
    where
        S: MetadataSource + ?Sized,
    {
        let ids = source.list_packages().await?;
        for id in ids {
            let mut package = source
                .get_package(&id)
                .await?
                .ok_or_else(|| NoticeError::PackageNotFound { id: id.clone() })?;
            self.add_package(&mut package);
        }
        Ok(())
    }

    /// Sorts every bucket's packages and returns the buckets ordered by id
    ///
    /// Bucket ids compare by code point, which puts `~`-prefixed unknown
    /// buckets last. Repeated calls return the same order.
    pub fn finalize(&mut self) -> Vec<&LicenseBucket> {
        self.sort_packages();
        self.sorted_buckets()
    }

    /// Finalizes the build and renders it
    ///
    /// # Errors
    /// Propagates renderer failures
    pub fn build(&mut self) -> Result<R::Output> {
        self.sort_packages();
        let buckets = self.sorted_buckets();
        self.renderer.render(&buckets)
    }

    /// Read-only projection of the accumulated buckets
    ///
    /// Works at any point of the build; bucket and package order are the
    /// current ones, not the finalized sort.
    pub fn summary(&self) -> NoticeSummary {
        let mut summary = NoticeSummary::default();

        for (id, bucket) in &self.buckets {
            summary.used_licenses.insert(
                id.clone(),
                UsedLicense {
                    packages: bucket
                        .packages()
                        .iter()
                        .map(|p| (p.name().to_string(), p.version().to_string()))
                        .collect(),
                    tags: bucket.tags().to_vec(),
                },
            );

            for tag in bucket.tags() {
                summary
                    .used_tags
                    .entry(tag.clone())
                    .or_default()
                    .push(id.clone());
            }
        }

        summary
    }

    pub fn bucket(&self, id: &str) -> Option<&LicenseBucket> {
        self.buckets.get(id)
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of packages added across all buckets
    pub fn package_count(&self) -> usize {
        self.buckets.values().map(|b| b.packages().len()).sum()
    }

    /// Number of buckets tagged as unknown
    pub fn unknown_bucket_count(&self) -> usize {
        self.buckets.values().filter(|b| b.is_unknown()).count()
    }

    fn sort_packages(&mut self) {
        for bucket in self.buckets.values_mut() {
            bucket
                .packages_mut()
                .sort_by(|a, b| locale_compare(a.name(), b.name()));
        }
    }

    fn sorted_buckets(&self) -> Vec<&LicenseBucket> {
        let mut buckets: Vec<&LicenseBucket> = self.buckets.values().collect();
        buckets.sort_by(|a, b| a.id().cmp(b.id()));
        buckets
    }
}
