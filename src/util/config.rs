//! Generation configuration.
//!
//! Upstream tooling resolves a TOML configuration file and hands the
//! parsed options to the mapper factory; everything here has a sensible
//! default so a missing or partial file still produces a working setup.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration consumed by the mapper factory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Generation options
    pub generation: GenerationOptions,
}

/// Options controlling workspace generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Whether the all-targets workspace scheme is generated.
    /// Automation flows force this on regardless.
    pub auto_generate_schemes: bool,

    /// Toolchain version to stamp as last-checked, if any
    pub last_upgrade_check: Option<String>,

    /// IDE template macros to write alongside the generated containers
    pub ide_template_macros: Option<IdeTemplateMacros>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            auto_generate_schemes: true,
            last_upgrade_check: None,
            ide_template_macros: None,
        }
    }
}

/// Template macros injected into generated containers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeTemplateMacros {
    /// Header prepended to files created from IDE templates
    pub file_header: Option<String>,
}

impl GenerationConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read generation config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse generation config: {}", path.display()))
    }

    /// Load configuration, falling back to defaults if the file is
    /// missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!(
                    "failed to load generation config from {}: {}",
                    path.display(),
                    e
                );
                Self::default()
            })
        } else {
            Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();
        assert!(config.generation.auto_generate_schemes);
        assert_eq!(config.generation.last_upgrade_check, None);
        assert_eq!(config.generation.ide_template_macros, None);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: GenerationConfig = toml::from_str(
            r#"
[generation]
auto_generate_schemes = false
last_upgrade_check = "1430"
"#,
        )
        .unwrap();

        assert!(!config.generation.auto_generate_schemes);
        assert_eq!(
            config.generation.last_upgrade_check.as_deref(),
            Some("1430")
        );
        assert_eq!(config.generation.ide_template_macros, None);
    }

    #[test]
    fn test_parse_template_macros() {
        let config: GenerationConfig = toml::from_str(
            r#"
[generation.ide_template_macros]
file_header = "// Copyright"
"#,
        )
        .unwrap();

        assert_eq!(
            config
                .generation
                .ide_template_macros
                .unwrap()
                .file_header
                .as_deref(),
            Some("// Copyright")
        );
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("generation.toml");
        std::fs::write(&path, "[generation]\nauto_generate_schemes = false\n").unwrap();

        let config = GenerationConfig::load(&path).unwrap();
        assert!(!config.generation.auto_generate_schemes);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let tmp = TempDir::new().unwrap();
        let config = GenerationConfig::load_or_default(&tmp.path().join("missing.toml"));
        assert_eq!(config, GenerationConfig::default());
    }
}
