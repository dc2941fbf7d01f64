/// License dictionary adapters
mod caching_dictionary;
mod configured_dictionary;
mod spdx_dictionary;
mod unknown_dictionary;

pub use caching_dictionary::CachingLicenseDictionary;
pub use configured_dictionary::ConfiguredLicenseDictionary;
pub use spdx_dictionary::SpdxLicenseDictionary;
pub use unknown_dictionary::UnknownLicenseDictionary;
