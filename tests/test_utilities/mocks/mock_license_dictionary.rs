use noticegen::prelude::*;
use std::collections::HashMap;

/// Mock LicenseDictionary with entries registered per test
#[derive(Default)]
pub struct MockLicenseDictionary {
    entries: HashMap<String, LicenseEntry>,
}

impl MockLicenseDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, name: &str, text: &str, tags: &[&str]) -> Self {
        self.entries.insert(
            name.to_string(),
            LicenseEntry::new(text, tags.iter().map(|t| t.to_string()).collect()),
        );
        self
    }
}

impl LicenseDictionary for MockLicenseDictionary {
    fn get(&self, name: &str) -> Option<LicenseEntry> {
        self.entries.get(name).cloned()
    }
}
