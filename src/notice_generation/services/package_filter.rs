use crate::notice_generation::domain::Package;
use crate::shared::error::NoticeError;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// PackageFilter - Keeps packages out of the notice by name
///
/// Supports `*` wildcards matching zero or more characters. Patterns are
/// case-sensitive and anchored at both ends.
#[derive(Debug)]
pub struct PackageFilter {
    patterns: Vec<ExcludePattern>,
}

impl PackageFilter {
    /// Creates a new PackageFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern (empty, too long, invalid characters, wildcards only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(NoticeError::Validation {
                message: format!(
                    "Too many exclusion patterns: {} (maximum: {})",
                    patterns.len(),
                    MAX_EXCLUDE_PATTERNS
                ),
            }
            .into());
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns true when the package should be left out of the notice
    pub fn excludes(&self, package: &Package) -> bool {
        self.matches(package.name())
    }

    /// Keeps only packages that match no exclusion pattern
    pub fn filter_packages(&self, packages: Vec<Package>) -> Vec<Package> {
        packages
            .into_iter()
            .filter(|pkg| !self.excludes(pkg))
            .collect()
    }

    /// Returns the patterns that have not matched any package so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn matches(&self, package_name: &str) -> bool {
        // every pattern is evaluated so unmatched-pattern tracking stays accurate
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(package_name) || hit)
    }
}

/// A single exclusion pattern, split on its wildcards
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    segments: Vec<String>,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let segments = pattern.split('*').map(str::to_string).collect();
        Ok(Self {
            original: pattern,
            segments,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, package_name: &str) -> bool {
        let is_match = match_segments(&self.segments, package_name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Matches `name` against pattern segments separated by `*`
///
/// The first segment must be a prefix and the last a suffix; the segments
/// in between must appear in order without overlapping.
fn match_segments(segments: &[String], name: &str) -> bool {
    let (first, rest) = match segments.split_first() {
        Some(split) => split,
        None => return name.is_empty(),
    };

    let Some((last, middle)) = rest.split_last() else {
        return name == first;
    };

    if name.len() < first.len() + last.len()
        || !name.starts_with(first.as_str())
        || !name.ends_with(last.as_str())
    {
        return false;
    }

    let mut remaining = &name[first.len()..name.len() - last.len()];
    for segment in middle {
        match remaining.find(segment.as_str()) {
            Some(pos) => remaining = &remaining[pos + segment.len()..],
            None => return false,
        }
    }
    true
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let invalid = |message: String| -> Result<()> {
        Err(NoticeError::Validation { message }.into())
    };

    if pattern.is_empty() {
        return invalid("Exclusion pattern cannot be empty".to_string());
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return invalid(format!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        ));
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        return invalid(format!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, slashes, @, and asterisks (*) are allowed.",
            ch, pattern
        ));
    }

    if pattern.chars().all(|c| c == '*') {
        return invalid(format!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        ));
    }

    Ok(())
}

/// Package names from npm-style registries carry `@scope/` prefixes
fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '@' | '*')
}
