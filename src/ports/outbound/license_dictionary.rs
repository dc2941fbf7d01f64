use crate::notice_generation::domain::LicenseEntry;

/// LicenseDictionary port for resolving license names
///
/// Maps a declared license name or identifier to canonical text and
/// classification tags. Lookups are pure: the same name always yields the
/// same answer, and `None` means the license is unknown.
pub trait LicenseDictionary {
    /// Looks up a license by its declared name
    ///
    /// # Arguments
    /// * `name` - License name as declared by a package (e.g., "MIT", "Apache-2.0")
    ///
    /// # Returns
    /// The dictionary entry, or `None` for an unrecognized license
    fn get(&self, name: &str) -> Option<LicenseEntry>;
}

impl<D: LicenseDictionary + ?Sized> LicenseDictionary for &D {
    fn get(&self, name: &str) -> Option<LicenseEntry> {
        (**self).get(name)
    }
}

impl<D: LicenseDictionary + ?Sized> LicenseDictionary for Box<D> {
    fn get(&self, name: &str) -> Option<LicenseEntry> {
        (**self).get(name)
    }
}
