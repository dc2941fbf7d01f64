mod collation;
mod license_hasher;
mod notice_builder;
mod package_filter;

pub use collation::locale_compare;
pub use license_hasher::license_hash;
pub use notice_builder::NoticeBuilder;
pub use package_filter::PackageFilter;
