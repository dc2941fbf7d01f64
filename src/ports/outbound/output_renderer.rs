use crate::notice_generation::domain::LicenseBucket;
use crate::shared::Result;

/// OutputRenderer port for turning finalized buckets into a document
///
/// Buckets arrive sorted by id with their packages sorted by name. The
/// output type is up to the renderer.
pub trait OutputRenderer {
    /// Rendered document type (e.g., `String`)
    type Output;

    /// Renders the finalized bucket list
    ///
    /// # Errors
    /// Returns an error if rendering or serialization fails
    fn render(&self, buckets: &[&LicenseBucket]) -> Result<Self::Output>;
}

impl<R: OutputRenderer + ?Sized> OutputRenderer for Box<R> {
    type Output = R::Output;

    fn render(&self, buckets: &[&LicenseBucket]) -> Result<Self::Output> {
        (**self).render(buckets)
    }
}
