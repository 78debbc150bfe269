use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for view configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse view config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Time-axis zoom unit, passed through to the renderer unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    #[default]
    Week,
    Month,
}

/// Pixel constants for timeline sizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Height of one display row
    #[serde(default = "default_row_height")]
    pub row_height: u32,
    /// Height of the time-axis header above the rows
    #[serde(default = "default_header_height")]
    pub header_height: u32,
    /// Floor for the overall chart height
    #[serde(default = "default_min_height")]
    pub min_height: u32,
    /// Extra chart padding below the rows
    #[serde(default)]
    pub padding: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            row_height: 50,
            header_height: 50,
            min_height: 400,
            padding: 0,
        }
    }
}

fn default_row_height() -> u32 {
    50
}

fn default_header_height() -> u32 {
    50
}

fn default_min_height() -> u32 {
    400
}

/// View configuration from gantry.toml
///
/// Every field has a default, so an absent or empty file yields a fully
/// working configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Time-axis zoom hint
    #[serde(default)]
    pub granularity: Granularity,
    /// Pixel constants for the timeline
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Bar fill overrides by role name (`completed`, `high`, `medium`,
    /// `low`, `project`, `placeholder`), hex `#rrggbb`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Progress fill overrides, same keys as `colors`
    #[serde(default)]
    pub progress_colors: HashMap<String, String>,
}

impl ViewConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<ViewConfig, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        ViewConfig::from_toml_str(&text)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<ViewConfig, ConfigError> {
        let config: ViewConfig = toml::from_str(text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = ViewConfig::from_toml_str("").unwrap();
        assert_eq!(config, ViewConfig::default());
        assert_eq!(config.granularity, Granularity::Week);
        assert_eq!(config.layout.row_height, 50);
        assert_eq!(config.layout.header_height, 50);
        assert_eq!(config.layout.min_height, 400);
        assert_eq!(config.layout.padding, 0);
    }

    #[test]
    fn test_partial_layout_keeps_other_defaults() {
        let config = ViewConfig::from_toml_str(
            r#"
granularity = "day"

[layout]
row_height = 40
"#,
        )
        .unwrap();
        assert_eq!(config.granularity, Granularity::Day);
        assert_eq!(config.layout.row_height, 40);
        assert_eq!(config.layout.header_height, 50);
        assert_eq!(config.layout.min_height, 400);
    }

    #[test]
    fn test_color_overrides_parse() {
        let config = ViewConfig::from_toml_str(
            r##"
[colors]
high = "#ff0000"

[progress_colors]
high = "#aa0000"
"##,
        )
        .unwrap();
        assert_eq!(config.colors.get("high").map(String::as_str), Some("#ff0000"));
        assert_eq!(
            config.progress_colors.get("high").map(String::as_str),
            Some("#aa0000")
        );
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = ViewConfig::from_toml_str("granularity = [").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gantry.toml");
        fs::write(
            &path,
            r#"
granularity = "month"

[layout]
min_height = 600
"#,
        )
        .unwrap();

        let config = ViewConfig::load(&path).unwrap();
        assert_eq!(config.granularity, Granularity::Month);
        assert_eq!(config.layout.min_height, 600);
    }

    #[test]
    fn test_load_missing_file_is_a_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = ViewConfig::load(&tmp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
