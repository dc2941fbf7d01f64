pub mod license_bucket;
pub mod license_entry;
pub mod package;
pub mod summary;

pub use license_bucket::{LicenseBucket, UNKNOWN_TAG};
pub use license_entry::LicenseEntry;
pub use package::Package;
pub use summary::{NoticeSummary, UsedLicense};
