use crate::notice_generation::domain::LicenseBucket;
use crate::ports::outbound::OutputRenderer;
use crate::shared::Result;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct NoticeDocument<'a> {
    metadata: Metadata,
    licenses: &'a [&'a LicenseBucket],
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tool: Tool,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

/// JsonRenderer adapter producing a machine-readable notice
///
/// Buckets are emitted in finalized order with their packages, text and
/// tags, under a metadata block naming the generating tool.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for JsonRenderer {
    type Output = String;

    fn render(&self, buckets: &[&LicenseBucket]) -> Result<String> {
        let document = NoticeDocument {
            metadata: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                tool: Tool {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            },
            licenses: buckets,
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}
