//! Tinct configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tinct_export::ExportFormat;
use tinct_theme::{ColorRole, CustomColors};

/// Default config file name
pub const CONFIG_FILE: &str = "tinct.toml";

/// Top-level Tinct configuration (tinct.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TinctConfig {
    /// Brand seeds; absent entries use the built-in seeds
    #[serde(default)]
    pub colors: CustomColors,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where and what to export
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output directory
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Format names: css, tailwind, figma, typescript
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_formats() -> Vec<String> {
    ExportFormat::ALL.iter().map(|f| f.id().to_string()).collect()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            formats: default_formats(),
        }
    }
}

impl OutputConfig {
    /// Parse `formats`, dropping duplicates while keeping order
    pub fn export_formats(&self) -> Result<Vec<ExportFormat>> {
        let mut formats = Vec::with_capacity(self.formats.len());
        for name in &self.formats {
            let format: ExportFormat = name
                .parse()
                .with_context(|| format!("Invalid entry in [output] formats: {name:?}"))?;
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        Ok(formats)
    }
}

impl TinctConfig {
    /// Load configuration from a file, or from `tinct.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No config found at {}. Run `tinct init` to create one.",
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Load `tinct.toml` from `dir` if present, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.is_file() {
            tracing::debug!("Using config {}", config_path.display());
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Configuration written by `tinct init`: every brand seed spelled out
    pub fn starter() -> Self {
        Self {
            colors: CustomColors {
                primary: Some(ColorRole::Primary.default_seed().to_string()),
                secondary: Some(ColorRole::Secondary.default_seed().to_string()),
                accent: Some(ColorRole::Accent.default_seed().to_string()),
            },
            output: OutputConfig {
                dir: PathBuf::from("tokens"),
                formats: default_formats(),
            },
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = TinctConfig::from_toml("").unwrap();
        assert_eq!(config, TinctConfig::default());
        assert_eq!(config.output.dir, PathBuf::from("."));
        assert_eq!(config.output.export_formats().unwrap(), ExportFormat::ALL.to_vec());
    }

    #[test]
    fn partial_sections() {
        let config = TinctConfig::from_toml(
            r##"
[colors]
primary = "#ff0000"

[output]
formats = ["css", "ts", "css"]
"##,
        )
        .unwrap();

        assert_eq!(config.colors.primary.as_deref(), Some("#ff0000"));
        assert_eq!(config.colors.secondary, None);
        assert_eq!(config.output.dir, PathBuf::from("."));
        assert_eq!(
            config.output.export_formats().unwrap(),
            vec![ExportFormat::Css, ExportFormat::TypeScript]
        );
    }

    #[test]
    fn unknown_format_is_an_error() {
        let config = TinctConfig::from_toml("[output]\nformats = [\"sass\"]\n").unwrap();
        let err = config.output.export_formats().unwrap_err();
        assert!(format!("{err:#}").contains("sass"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(TinctConfig::from_toml("[colors\nprimary = 1").is_err());
    }

    #[test]
    fn starter_round_trips() {
        let starter = TinctConfig::starter();
        let text = starter.to_toml().unwrap();
        assert!(text.contains("primary = \"#2563eb\""));
        assert_eq!(TinctConfig::from_toml(&text).unwrap(), starter);
    }
}
