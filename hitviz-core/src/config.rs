//! Diagram configuration
//!
//! Loaded from TOML text supplied by the caller; every field has a default so
//! partial documents are accepted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::mapper::ColorMode;
use crate::palette::ColorScheme;
use crate::types::CanvasGeometry;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramConfig {
    #[serde(default)]
    pub geometry: CanvasGeometry,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Breakpoint strategy and palette
    #[serde(default)]
    pub color_scheme: ColorScheme,

    /// Continuous gradient or discrete buckets
    #[serde(default)]
    pub color_mode: ColorMode,

    /// Draw domain annotations inside subject tracks
    #[serde(default = "default_true")]
    pub show_domains: bool,

    /// Lay out the color legend
    #[serde(default = "default_true")]
    pub show_legend: bool,

    /// Upper bound on hits planned per diagram; 0 means unlimited
    #[serde(default = "default_max_hits")]
    pub max_hits: usize,
}

fn default_true() -> bool { true }
fn default_max_hits() -> usize { 50 }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            color_mode: ColorMode::default(),
            show_domains: true,
            show_legend: true,
            max_hits: default_max_hits(),
        }
    }
}

impl DiagramConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DiagramConfig = toml::from_str(content)
            .context("Failed to parse diagram configuration")?;
        log::debug!(
            "Loaded diagram configuration: scheme={}, mode={:?}",
            config.display.color_scheme,
            config.display.color_mode
        );
        Ok(config)
    }

    /// Serialize configuration to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize diagram configuration")
    }

    /// Generate example configuration content
    pub fn example_toml() -> Result<String> {
        Self::default().to_toml_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DiagramConfig::default();
        assert_eq!(config.display.color_scheme, ColorScheme::Dynamic);
        assert_eq!(config.display.color_mode, ColorMode::Gradient);
        assert_eq!(config.geometry.margin_width, 2.0);
    }

    #[test]
    fn test_config_roundtrip() -> Result<()> {
        let mut config = DiagramConfig::default();
        config.display.color_scheme = ColorScheme::NcbiBlast;
        config.display.color_mode = ColorMode::Bucket;
        config.geometry.content_width = 640.0;

        let text = config.to_toml_string()?;
        let loaded = DiagramConfig::from_toml_str(&text)?;
        assert_eq!(config, loaded);
        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let config = DiagramConfig::from_toml_str(
            "[display]\ncolor_scheme = \"blasterjs\"\n\n[geometry]\nlabel_width = 80.0\n",
        )?;
        assert_eq!(config.display.color_scheme, ColorScheme::BlasterJs);
        assert!(config.display.show_domains);
        assert_eq!(config.geometry.label_width, 80.0);
        assert_eq!(config.geometry.content_width, 1000.0);
        Ok(())
    }

    #[test]
    fn test_unknown_scheme_rejected() {
        let err = DiagramConfig::from_toml_str("[display]\ncolor_scheme = \"rainbow\"\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse diagram configuration"));
    }

    #[test]
    fn test_example_toml_generation() -> Result<()> {
        let example = DiagramConfig::example_toml()?;
        assert!(example.contains("[geometry]"));
        assert!(example.contains("[display]"));
        assert!(example.contains("color_scheme = \"dynamic\""));
        Ok(())
    }
}
