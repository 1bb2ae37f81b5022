//! # CLI Configuration
//!
//! Optional YAML file supplying per-business defaults. Every section and
//! field is optional; command-line arguments override whatever is set here.
//!
//! ```yaml
//! business:
//!   gstin: 27AAAPL1234C1Z5
//!   premium: true
//! export:
//!   out_dir: ./exports
//!   target: spreadsheet
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub business: BusinessConfig,
    pub export: ExportConfig,
}

/// The business whose ledger is being processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusinessConfig {
    /// Registered GSTIN on the business profile.
    pub gstin: Option<String>,
    /// Whether the business is on the premium tier.
    pub premium: bool,
}

/// Export defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub out_dir: Option<PathBuf>,
    /// Export target slug, e.g. `spreadsheet` or `brsr-core`.
    pub target: Option<String>,
}

impl CliConfig {
    /// Load the config at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        tracing::debug!(config = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse a YAML config document. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_document() {
        let config = CliConfig::from_yaml(
            "business:\n  gstin: 27AAAPL1234C1Z5\n  premium: true\n\
             export:\n  out_dir: ./exports\n  target: brsr-core\n",
        )
        .unwrap();
        assert_eq!(config.business.gstin.as_deref(), Some("27AAAPL1234C1Z5"));
        assert!(config.business.premium);
        assert_eq!(config.export.out_dir, Some(PathBuf::from("./exports")));
        assert_eq!(config.export.target.as_deref(), Some("brsr-core"));
    }

    #[test]
    fn sections_are_optional() {
        let config = CliConfig::from_yaml("business:\n  premium: true\n").unwrap();
        assert!(config.business.premium);
        assert_eq!(config.business.gstin, None);
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(CliConfig::from_yaml("").unwrap(), CliConfig::default());
        assert_eq!(CliConfig::from_yaml("  \n").unwrap(), CliConfig::default());
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(CliConfig::from_yaml("business:\n  tier: premium\n").is_err());
    }

    #[test]
    fn no_path_is_default() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn missing_file_names_path() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/verdant.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/verdant.yaml"));
    }
}
