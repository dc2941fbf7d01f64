/// Metadata source adapters
mod json_manifest_source;

pub use json_manifest_source::JsonManifestSource;
