use crate::notice_generation::domain::LicenseBucket;
use crate::ports::outbound::OutputRenderer;
use crate::shared::Result;

/// Markdown table header for package information
const TABLE_HEADER: &str = "| Package | Version |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|---------|\n";

/// MarkdownRenderer adapter producing a Markdown notice document
///
/// Each bucket becomes a section with a package table and the license
/// text in a fenced block. Unknown-license buckets are flagged for review.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Backtick fence longer than any backtick run inside `text`
    fn code_fence(text: &str) -> String {
        let longest = text
            .split(|c| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        "`".repeat(longest.max(2) + 1)
    }

    fn section_title(bucket: &LicenseBucket) -> String {
        let name = bucket.name().unwrap_or("Unspecified license");
        if bucket.is_unknown() {
            format!("{} ⚠️ needs review", name)
        } else {
            name.to_string()
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownRenderer {
    fn render_header(&self, output: &mut String, buckets: &[&LicenseBucket]) {
        let package_count: usize = buckets.iter().map(|b| b.packages().len()).sum();

        output.push_str("# Third-Party Notices\n\n");
        output.push_str(&format!(
            "This product includes {} third-party package(s) under {} distinct license text(s).\n\n",
            package_count,
            buckets.len()
        ));
    }

    fn render_bucket(&self, output: &mut String, bucket: &LicenseBucket) {
        output.push_str(&format!("## {}\n\n", Self::section_title(bucket)));

        if !bucket.tags().is_empty() {
            output.push_str(&format!("Tags: {}\n\n", bucket.tags().join(", ")));
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for package in bucket.packages() {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(package.name()),
                Self::escape_markdown_table_cell(package.version())
            ));
        }
        output.push('\n');

        let text = bucket.text().trim_end();
        if text.is_empty() {
            output.push_str("_No license text was provided._\n\n");
        } else {
            let fence = Self::code_fence(text);
            output.push_str(&format!("{}text\n{}\n{}\n\n", fence, text, fence));
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for MarkdownRenderer {
    type Output = String;

    fn render(&self, buckets: &[&LicenseBucket]) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, buckets);
        for bucket in buckets {
            self.render_bucket(&mut output, bucket);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice_generation::domain::{Package, UNKNOWN_TAG};

    fn bucket(name: Option<&str>, text: &str, tag: &str) -> LicenseBucket {
        let mut bucket = LicenseBucket::new(
            "id".to_string(),
            name.map(String::from),
            text.to_string(),
            vec![tag.to_string()],
        );
        bucket.push(Package::new("a|b", "1.0.0"));
        bucket
    }

    #[test]
    fn test_render_sections() {
        let mit = bucket(Some("MIT"), "MIT License", "permissive");
        let output = MarkdownRenderer::new().render(&[&mit]).unwrap();

        assert!(output.starts_with("# Third-Party Notices\n\n"));
        assert!(output.contains("1 third-party package(s) under 1 distinct license text(s)"));
        assert!(output.contains("## MIT\n\n"));
        assert!(output.contains("Tags: permissive"));
        assert!(output.contains("| a\\|b | 1.0.0 |"));
        assert!(output.contains("```text\nMIT License\n```"));
    }

    #[test]
    fn test_unknown_bucket_is_flagged() {
        let unknown = bucket(None, "", UNKNOWN_TAG);
        let output = MarkdownRenderer::new().render(&[&unknown]).unwrap();

        assert!(output.contains("## Unspecified license ⚠️ needs review"));
        assert!(output.contains("_No license text was provided._"));
    }

    #[test]
    fn test_fence_outgrows_backticks_in_text() {
        let text = "see ```code``` here";
        assert_eq!(MarkdownRenderer::code_fence(text), "````");
        assert_eq!(MarkdownRenderer::code_fence("plain"), "```");
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownRenderer::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }
}
