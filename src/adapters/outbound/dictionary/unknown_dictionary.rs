use crate::notice_generation::domain::LicenseEntry;
use crate::ports::outbound::LicenseDictionary;

/// UnknownLicenseDictionary resolves nothing
///
/// Every package lands in an unknown-license bucket keyed by its declared
/// name and text. Useful for tests and for auditing raw metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnknownLicenseDictionary;

impl UnknownLicenseDictionary {
    pub fn new() -> Self {
        Self
    }
}

impl LicenseDictionary for UnknownLicenseDictionary {
    fn get(&self, _name: &str) -> Option<LicenseEntry> {
        None
    }
}
