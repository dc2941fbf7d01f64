/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports only: the bucketing engine is driven directly
/// by the application layer.
pub mod outbound;
