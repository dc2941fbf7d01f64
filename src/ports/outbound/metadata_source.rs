use crate::notice_generation::domain::Package;
use crate::shared::Result;
use async_trait::async_trait;

/// MetadataSource port for enumerating packages and their license metadata
///
/// This port abstracts where package descriptors come from (a manifest
/// file, a lockfile walker, a registry client).
///
/// # Async Support
/// Listing and fetching may perform I/O. Implementations must be
/// `Send + Sync` so a source can be shared across tasks.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Lists the identifiers of every package the source knows about
    ///
    /// # Errors
    /// Returns an error if the underlying source cannot be enumerated
    async fn list_packages(&self) -> Result<Vec<String>>;

    /// Fetches the descriptor for a previously listed package id
    ///
    /// # Returns
    /// `Some(package)` for every listed id; `None` only for ids the source
    /// never listed
    ///
    /// # Errors
    /// Returns an error if the fetch itself fails
    async fn get_package(&self, id: &str) -> Result<Option<Package>>;
}
