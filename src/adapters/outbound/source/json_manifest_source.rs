use crate::notice_generation::domain::Package;
use crate::ports::outbound::MetadataSource;
use crate::shared::error::NoticeError;
use crate::shared::security::{read_regular_file, resolve_within};
use crate::shared::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One manifest entry: a package plus an optional license file reference
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(flatten)]
    package: Package,
    #[serde(default, rename = "textFile")]
    text_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Manifest {
    List(Vec<ManifestEntry>),
    Object { packages: Vec<ManifestEntry> },
}

impl Manifest {
    fn into_entries(self) -> Vec<ManifestEntry> {
        match self {
            Manifest::List(entries) => entries,
            Manifest::Object { packages } => packages,
        }
    }
}

/// JsonManifestSource adapter reading packages from a JSON manifest file
///
/// Accepts either a top-level array of packages or an object with a
/// `packages` array. Each entry has `name`, `version`, and optional
/// `license`, `text`, `textFile` and `uuid`. A `textFile` path is resolved
/// against the manifest's directory and used when `text` is missing or
/// empty. Packages are listed as `name@version`, in manifest order.
pub struct JsonManifestSource {
    path: PathBuf,
    packages: IndexMap<String, Package>,
}

impl JsonManifestSource {
    /// Loads and validates a manifest file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist, is a symlink, or is too large
    /// - The content is not a valid manifest
    /// - A referenced `textFile` cannot be read or points outside the
    ///   manifest's directory
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NoticeError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass an existing package manifest with --input".to_string(),
            }
            .into());
        }

        let content = read_regular_file(path, "package manifest")?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let packages = Self::parse(&content, path, base_dir)?;

        Ok(Self {
            path: path.to_path_buf(),
            packages,
        })
    }

    /// Path the manifest was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    fn parse(content: &str, path: &Path, base_dir: &Path) -> Result<IndexMap<String, Package>> {
        let manifest: Manifest =
            serde_json::from_str(content).map_err(|e| NoticeError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let mut packages = IndexMap::new();
        for entry in manifest.into_entries() {
            let mut package = entry.package;

            let has_text = package.text().is_some_and(|t| !t.is_empty());
            if let (false, Some(text_file)) = (has_text, entry.text_file) {
                let text_path = resolve_within(base_dir, &text_file, "license text file")?;
                let text = read_regular_file(&text_path, "license text file")?;
                package.set_text(text);
            }

            let id = Self::unique_id(&packages, &package);
            packages.insert(id, package);
        }

        Ok(packages)
    }

    /// `name@version`, with `#n` appended when the pair repeats
    fn unique_id(existing: &IndexMap<String, Package>, package: &Package) -> String {
        let base = format!("{}@{}", package.name(), package.version());
        if !existing.contains_key(&base) {
            return base;
        }

        let mut n = 2;
        loop {
            let candidate = format!("{}#{}", base, n);
            if !existing.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[async_trait]
impl MetadataSource for JsonManifestSource {
    async fn list_packages(&self) -> Result<Vec<String>> {
        Ok(self.packages.keys().cloned().collect())
    }

    async fn get_package(&self, id: &str) -> Result<Option<Package>> {
        Ok(self.packages.get(id).cloned())
    }
}
