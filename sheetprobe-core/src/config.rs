//! Configuration for discovery and preview limits

use crate::error::{ProbeError, ProbeResult};
use crate::inspect::InspectOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "sheetprobe.toml";

/// Parameters that may appear under `[global]` or `[sheets."Name"]`
pub const PARAM_KEYS: &[&str] = &[
    "preview_rows",
    "preview_cols",
    "text_width",
    "max_formulas",
    "formula_width",
];

/// Main inspector configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub sheets: HashMap<String, SheetConfig>,
}

impl ProbeConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ProbeResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> ProbeResult<Self> {
        let config: ProbeConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Reject values the inspector cannot honour
    pub fn validate(&self) -> ProbeResult<()> {
        if self.global.extensions.is_empty() {
            return Err(ProbeError::Config(
                "global extensions must list at least one extension".to_string(),
            ));
        }
        for ext in &self.global.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(ProbeError::Config(format!(
                    "extension '{}' must be given without a leading dot",
                    ext
                )));
            }
        }

        validate_params(&self.global.params, "global")?;
        for (sheet_name, sheet_config) in &self.sheets {
            validate_params(&sheet_config.params, &format!("sheet '{}'", sheet_name))?;
        }

        Ok(())
    }

    /// Get a parameter value with fallback chain: sheet -> global
    pub fn get_param_int(&self, key: &str, sheet_name: Option<&str>) -> Option<i64> {
        // Try sheet-specific first
        if let Some(sheet) = sheet_name.and_then(|name| self.sheets.get(name)) {
            if let Some(value) = sheet.params.get(key).and_then(|v| v.as_integer()) {
                return Some(value);
            }
        }

        // Try global
        self.global.params.get(key).and_then(|v| v.as_integer())
    }

    /// Preview limits for a sheet, falling back to built-in defaults
    pub fn inspect_options(&self, sheet_name: Option<&str>) -> InspectOptions {
        let defaults = InspectOptions::default();
        let get = |key: &str| -> Option<u64> {
            self.get_param_int(key, sheet_name).and_then(|v| u64::try_from(v).ok())
        };
        let get_u32 = |key: &str, default: u32| -> u32 {
            get(key).map_or(default, |v| u32::try_from(v).unwrap_or(u32::MAX))
        };
        let get_usize = |key: &str, default: usize| -> usize {
            get(key).map_or(default, |v| usize::try_from(v).unwrap_or(usize::MAX))
        };

        InspectOptions {
            preview_rows: get_u32("preview_rows", defaults.preview_rows),
            preview_cols: get_u32("preview_cols", defaults.preview_cols),
            text_width: get_usize("text_width", defaults.text_width),
            max_formulas: get_usize("max_formulas", defaults.max_formulas),
            formula_width: get_usize("formula_width", defaults.formula_width),
        }
    }
}

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Directory scanned by the batch driver
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
    /// File extensions picked up by the batch driver, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(flatten)]
    pub params: HashMap<String, toml::Value>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            extensions: default_extensions(),
            params: HashMap::new(),
        }
    }
}

/// Sheet-specific configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetConfig {
    #[serde(flatten)]
    pub params: HashMap<String, toml::Value>,
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("docs").join("templates")
}

fn default_extensions() -> Vec<String> {
    vec!["xlsx".to_string(), "xls".to_string()]
}

fn validate_params(params: &HashMap<String, toml::Value>, scope: &str) -> ProbeResult<()> {
    for (key, value) in params {
        if !PARAM_KEYS.contains(&key.as_str()) {
            return Err(ProbeError::Config(format!(
                "Unknown parameter '{}' in {}",
                key, scope
            )));
        }
        match value.as_integer() {
            Some(v) if v >= 0 => {}
            _ => {
                return Err(ProbeError::Config(format!(
                    "Parameter '{}' in {} must be a non-negative integer",
                    key, scope
                )));
            }
        }
    }
    Ok(())
}
