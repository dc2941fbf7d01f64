use crate::notice_generation::domain::LicenseEntry;
use crate::ports::outbound::LicenseDictionary;
use dashmap::DashMap;

/// CachingLicenseDictionary memoizes lookups of an inner dictionary
///
/// Dictionary lookups are pure, so results (misses included) are cached
/// per name for the lifetime of the wrapper. Wraps dictionaries whose
/// lookups are expensive (alias scans, configured layers, remote catalogs).
pub struct CachingLicenseDictionary<D> {
    inner: D,
    cache: DashMap<String, Option<LicenseEntry>>,
}

impl<D: LicenseDictionary> CachingLicenseDictionary<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }
}

impl<D: LicenseDictionary> LicenseDictionary for CachingLicenseDictionary<D> {
    fn get(&self, name: &str) -> Option<LicenseEntry> {
        if let Some(cached) = self.cache.get(name) {
            return cached.clone();
        }

        let entry = self.inner.get(name);
        self.cache.insert(name.to_string(), entry.clone());
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingDictionary {
        calls: AtomicUsize,
    }

    impl LicenseDictionary for CountingDictionary {
        fn get(&self, name: &str) -> Option<LicenseEntry> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (name == "MIT").then(|| LicenseEntry::new("MIT text", vec!["permissive".to_string()]))
        }
    }

    fn caching() -> CachingLicenseDictionary<CountingDictionary> {
        CachingLicenseDictionary::new(CountingDictionary {
            calls: AtomicUsize::new(0),
        })
    }

    #[test]
    fn test_returns_cached_value() {
        let dictionary = caching();
        let first = dictionary.get("MIT");
        let second = dictionary.get("MIT");

        assert_eq!(first, second);
        assert_eq!(first.unwrap().text(), "MIT text");
        assert_eq!(dictionary.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_caches_misses() {
        let dictionary = caching();
        assert_eq!(dictionary.get("Custom"), None);
        assert_eq!(dictionary.get("Custom"), None);
        assert_eq!(dictionary.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_caches_one_entry_per_name() {
        let dictionary = caching();
        dictionary.get("MIT");
        dictionary.get("Custom");
        dictionary.get("MIT");
        assert_eq!(dictionary.cache.len(), 2);
    }
}
