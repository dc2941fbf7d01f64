use crate::adapters::outbound::renderers::{JsonRenderer, MarkdownRenderer, TextRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::OutputRenderer;

/// Boxed renderer producing a string document
pub type BoxedRenderer = Box<dyn OutputRenderer<Output = String>>;

/// Factory for creating notice renderers
///
/// Selects the renderer adapter for an output format.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use noticegen::application::dto::OutputFormat;
    /// use noticegen::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> BoxedRenderer {
        match format {
            OutputFormat::Text => Box::new(TextRenderer::new()),
            OutputFormat::Markdown => Box::new(MarkdownRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating plain-text NOTICE output...",
            OutputFormat::Markdown => "📝 Generating Markdown format output...",
            OutputFormat::Json => "📝 Generating JSON format output...",
        }
    }
}
