use super::package_label;
use crate::notice_generation::domain::LicenseBucket;
use crate::ports::outbound::OutputRenderer;
use crate::shared::Result;

/// Rule printed between license blocks
const SEPARATOR: &str = "\n-----\n\n";

/// TextRenderer adapter producing a plain-text NOTICE file
///
/// One block per bucket: the packages sharing the license, then the
/// license text once.
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_bucket(&self, output: &mut String, bucket: &LicenseBucket) {
        let packages: Vec<String> = bucket.packages().iter().map(package_label).collect();

        output.push_str("The following software may be included in this product: ");
        output.push_str(&packages.join(", "));
        output.push_str(". This software contains the following license and notice below:\n\n");

        let text = bucket.text().trim_end();
        if text.is_empty() {
            output.push_str("(no license text was provided)\n");
        } else {
            output.push_str(text);
            output.push('\n');
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for TextRenderer {
    type Output = String;

    fn render(&self, buckets: &[&LicenseBucket]) -> Result<String> {
        let mut output = String::new();

        for (i, bucket) in buckets.iter().enumerate() {
            if i > 0 {
                output.push_str(SEPARATOR);
            }
            self.render_bucket(&mut output, bucket);
        }

        Ok(output)
    }
}
