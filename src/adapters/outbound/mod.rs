/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod dictionary;
pub mod filesystem;
pub mod renderers;
pub mod source;
