use crate::cli::{ColorMode, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub output: OutputRules,
    pub check: CheckRules,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputRules {
    pub format: OutputFormat,
    pub color: ColorMode,
    pub pretty_json: bool,
}

impl Default for OutputRules {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: ColorMode::Auto,
            pretty_json: true,
        }
    }
}

/// Which lines of a file `check` treats as expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckRules {
    /// Skip lines whose first non-space character is `#`
    pub skip_comments: bool,
    /// Skip lines that are empty once surrounding spaces are removed
    pub skip_blank: bool,
}

impl Default for CheckRules {
    fn default() -> Self {
        Self {
            skip_comments: true,
            skip_blank: true,
        }
    }
}

impl CheckRules {
    pub fn should_check(&self, line: &str) -> bool {
        let trimmed = line.trim_matches(' ');
        if self.skip_blank && trimmed.is_empty() {
            return false;
        }
        !(self.skip_comments && trimmed.starts_with('#'))
    }
}

pub fn load_config(path: Option<&Path>) -> Result<ToolConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ToolConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<ToolConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

pub fn default_config() -> &'static ToolConfig {
    static DEFAULT_CONFIG: LazyLock<ToolConfig> = LazyLock::new(ToolConfig::default);
    &DEFAULT_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = default_config();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.color, ColorMode::Auto);
        assert!(config.output.pretty_json);
        assert!(config.check.skip_comments);
        assert!(config.check.skip_blank);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: ToolConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty_json);
        assert_eq!(config.check, CheckRules::default());
    }

    #[test]
    fn test_should_check() {
        let rules = CheckRules::default();
        assert!(rules.should_check("main -idle"));
        assert!(!rules.should_check("   "));
        assert!(!rules.should_check("  # comment"));

        let strict = CheckRules {
            skip_comments: false,
            skip_blank: false,
        };
        assert!(strict.should_check(""));
        assert!(strict.should_check("# not a comment here"));
    }
}
