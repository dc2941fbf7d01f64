/// LicenseEntry value object returned by a license dictionary lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseEntry {
    text: String,
    tags: Vec<String>,
}

impl LicenseEntry {
    pub fn new(text: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            tags,
        }
    }

    /// Canonical license text; may be empty when the catalog has none
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
