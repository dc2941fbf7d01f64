use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Package value object as reported by a metadata source
///
/// `license` and `text` are both optional; sparse metadata is routed to an
/// unknown-license bucket rather than rejected. `uuid` is assigned at most
/// once and never regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uuid: Option<String>,
}

impl Package {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            license: None,
            text: None,
            uuid: None,
        }
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    /// Returns the package's unique id, generating a UUID v4 if it has none
    pub fn ensure_uuid(&mut self) -> &str {
        self.uuid.get_or_insert_with(|| Uuid::new_v4().to_string())
    }

    /// Replaces the literal license text (used by sources that load text files)
    pub(crate) fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }
}
