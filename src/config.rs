//! Configuration file support for noticegen.
//!
//! Provides YAML-based configuration through `noticegen.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::notice_generation::domain::LicenseEntry;
use crate::shared::security::{read_regular_file, resolve_within};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "noticegen.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub exclude_packages: Option<Vec<String>>,
    /// Project-specific licenses, consulted before the SPDX catalog.
    pub licenses: Option<HashMap<String, LicenseConfig>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
    /// Directory the file was loaded from; `text_file` paths resolve against it.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// A license declared in the config file.
#[derive(Debug, Deserialize, Default)]
pub struct LicenseConfig {
    pub text: Option<String>,
    pub text_file: Option<PathBuf>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ConfigFile {
    /// Parsed `format`, if one is set.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }

    /// Declared licenses as dictionary entries, with `text_file`s loaded.
    pub fn license_entries(&self) -> Result<HashMap<String, LicenseEntry>> {
        let Some(licenses) = &self.licenses else {
            return Ok(HashMap::new());
        };

        let mut entries = HashMap::with_capacity(licenses.len());
        for (name, license) in licenses {
            let text = match (&license.text, &license.text_file) {
                (Some(text), _) => text.clone(),
                (None, Some(file)) => resolve_within(&self.base_dir, file, "license text file")
                    .and_then(|path| read_regular_file(&path, "license text file"))
                    .with_context(|| format!("Failed to load text for config license '{}'", name))?,
                (None, None) => String::new(),
            };
            entries.insert(name.clone(), LicenseEntry::new(text, license.tags.clone()));
        }
        Ok(entries)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;
    config.base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Err(e) = config.output_format() {
        bail!("Invalid config: {}", e);
    }

    if let Some(ref licenses) = config.licenses {
        for (name, license) in licenses {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: license names must not be empty.\n\n\
                     💡 Hint: Use the license name packages declare (e.g., \"Acme-Proprietary\")."
                );
            }
            if license.text.is_some() && license.text_file.is_some() {
                bail!(
                    "Invalid config: license '{}' sets both 'text' and 'text_file'.\n\n\
                     💡 Hint: Keep only one of them.",
                    name
                );
            }
            if license.tags.iter().any(|t| t.trim().is_empty()) {
                bail!("Invalid config: license '{}' has an empty tag.", name);
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
