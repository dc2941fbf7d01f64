use crate::notice_generation::domain::LicenseEntry;
use crate::ports::outbound::LicenseDictionary;
use std::collections::HashMap;

/// ConfiguredLicenseDictionary layers user-declared licenses over another dictionary
///
/// Entries come from the config file's `licenses` section and win over
/// the fallback, so a team can pin the text of an in-house license or
/// re-tag a catalogued one.
pub struct ConfiguredLicenseDictionary<D> {
    entries: HashMap<String, LicenseEntry>,
    fallback: D,
}

impl<D: LicenseDictionary> ConfiguredLicenseDictionary<D> {
    pub fn new(entries: HashMap<String, LicenseEntry>, fallback: D) -> Self {
        Self { entries, fallback }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D: LicenseDictionary> LicenseDictionary for ConfiguredLicenseDictionary<D> {
    fn get(&self, name: &str) -> Option<LicenseEntry> {
        self.entries
            .get(name)
            .cloned()
            .or_else(|| self.fallback.get(name))
    }
}
