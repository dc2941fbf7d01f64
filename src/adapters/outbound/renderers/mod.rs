/// Output renderers for finalized license buckets
mod json_renderer;
mod markdown_renderer;
mod text_renderer;

pub use json_renderer::JsonRenderer;
pub use markdown_renderer::MarkdownRenderer;
pub use text_renderer::TextRenderer;

use crate::notice_generation::domain::Package;

/// `name version`, or just `name` when the version is unknown
fn package_label(package: &Package) -> String {
    if package.version().is_empty() {
        package.name().to_string()
    } else {
        format!("{} {}", package.name(), package.version())
    }
}
