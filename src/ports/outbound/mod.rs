/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the bucketing engine and the
/// application layer use to reach license dictionaries, metadata sources,
/// renderers and the console.
pub mod license_dictionary;
pub mod metadata_source;
pub mod output_presenter;
pub mod output_renderer;
pub mod progress_reporter;

pub use license_dictionary::LicenseDictionary;
pub use metadata_source::MetadataSource;
pub use output_presenter::OutputPresenter;
pub use output_renderer::OutputRenderer;
pub use progress_reporter::ProgressReporter;
