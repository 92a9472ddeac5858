use crate::core::render::RenderOptions;
use crate::utils::error::{Result, RouteError};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file passed with `--config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub render: RenderOptions,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"netroute=debug"`.
    pub level: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RouteError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| RouteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        let render = &self.render;
        if render.delimiter.is_empty() {
            return Err(RouteError::ConfigError {
                message: "render.delimiter cannot be empty".to_string(),
            });
        }
        if !render.highlight_weight.is_finite() {
            return Err(RouteError::ConfigError {
                message: "render.highlight_weight must be a finite number".to_string(),
            });
        }
        validate_range("render.link_width", render.link_width, 1, 100)
    }
}
