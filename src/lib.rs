//! noticegen - attribution notice generator
//!
//! Groups the licenses of a project's dependencies into deduplicated
//! buckets and renders a single notice document. Packages whose license
//! texts differ only in whitespace, punctuation or case share one bucket,
//! so each distinct text is printed once.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`notice_generation`): Packages, license buckets and the bucketing engine
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use noticegen::prelude::*;
//! use std::path::Path;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let source = JsonManifestSource::open(Path::new("packages.json"))?;
//! let dictionary = CachingLicenseDictionary::new(SpdxLicenseDictionary::new());
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case and execute
//! let use_case = GenerateNoticeUseCase::new(source, dictionary, progress_reporter);
//! let response = use_case
//!     .execute(NoticeRequest::new(OutputFormat::Markdown, vec![]))
//!     .await?;
//!
//! println!("{}", response.document);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod notice_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::dictionary::{
        CachingLicenseDictionary, ConfiguredLicenseDictionary, SpdxLicenseDictionary,
        UnknownLicenseDictionary,
    };
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::renderers::{JsonRenderer, MarkdownRenderer, TextRenderer};
    pub use crate::adapters::outbound::source::JsonManifestSource;
    pub use crate::application::dto::{NoticeRequest, NoticeResponse, OutputFormat};
    pub use crate::application::use_cases::GenerateNoticeUseCase;
    pub use crate::notice_generation::domain::{
        LicenseBucket, LicenseEntry, NoticeSummary, Package, UsedLicense,
    };
    pub use crate::notice_generation::services::{license_hash, NoticeBuilder, PackageFilter};
    pub use crate::ports::outbound::{
        LicenseDictionary, MetadataSource, OutputPresenter, OutputRenderer, ProgressReporter,
    };
    pub use crate::shared::Result;
}
