/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: license dictionaries,
/// metadata sources, renderers, file output and console feedback.
pub mod outbound;
