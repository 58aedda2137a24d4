//! Suite configuration: which captured response to check, and against what

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dispatch::Expectations;
use crate::hal::schema_hal;

/// Suite configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Captured response snapshot (JSON or YAML), relative to the config file
    pub response: PathBuf,

    /// Expected response properties
    #[serde(default)]
    pub expect: ExpectationConfig,
}

/// Expectations as written in a config file.
///
/// The schema can be given in exactly one of three ways: inline
/// (`json_schema`), from a file (`schema_file`), or as a named preset
/// (`schema = "hal"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectationConfig {
    #[serde(default)]
    pub status_code: Option<i64>,

    /// Response time limit in milliseconds
    #[serde(default)]
    pub time_ms: Option<f64>,

    #[serde(default)]
    pub content_type: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    /// Inline JSON Schema
    #[serde(default)]
    pub json_schema: Option<serde_json::Value>,

    /// Path to a JSON Schema file, relative to the config file
    #[serde(default)]
    pub schema_file: Option<PathBuf>,

    /// Built-in schema
    #[serde(default)]
    pub schema: Option<SchemaPreset>,
}

/// Schemas shipped with apicheck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaPreset {
    /// HAL envelope (`_links`, `_embedded`, `_page`)
    Hal,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            response: PathBuf::from("response.json"),
            expect: ExpectationConfig::default(),
        }
    }
}

impl SuiteConfig {
    /// Load config from file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e.to_string()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    /// Load from the first default location that exists.
    ///
    /// Returns the config together with the path it was read from.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when no candidate exists, or the load error.
    pub fn load_default() -> Result<(Self, PathBuf), ConfigError> {
        let candidates = [".apicheck.toml", ".apicheck.json", "apicheck.toml"];

        for name in candidates {
            let path = Path::new(name);
            if path.exists() {
                return Self::load(path).map(|cfg| (cfg, path.to_path_buf()));
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Create example config file
    pub fn example() -> &'static str {
        r#"# apicheck configuration

# Captured response to check (JSON or YAML)
response = "response.json"

[expect]
status_code = 200
content_type = "application/hal+json"

# Response time limit in milliseconds
# time_ms = 500

# Expected Location header (e.g. after a POST)
# location = "/users/42"

# Schema: built-in preset, a file, or inline (pick one)
schema = "hal"
# schema_file = "schemas/user.json"
# [expect.json_schema]
# type = "object"
# required = ["id"]
"#
    }
}

impl ExpectationConfig {
    /// Resolve into [`Expectations`], reading `schema_file` relative to `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Schema`] when more than one schema source is set or
    /// the schema file cannot be read or parsed.
    pub fn to_expectations(&self, base_dir: &Path) -> Result<Expectations, ConfigError> {
        let sources = usize::from(self.json_schema.is_some())
            + usize::from(self.schema_file.is_some())
            + usize::from(self.schema.is_some());
        if sources > 1 {
            return Err(ConfigError::Schema(
                "set only one of json_schema, schema_file, schema".into(),
            ));
        }

        let json_schema = if let Some(inline) = &self.json_schema {
            Some(inline.clone())
        } else if let Some(file) = &self.schema_file {
            let path = base_dir.join(file);
            let content = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::Schema(format!("{}: {e}", path.display())))?;
            Some(
                serde_json::from_str(&content)
                    .map_err(|e| ConfigError::Schema(format!("{}: {e}", path.display())))?,
            )
        } else {
            self.schema.map(|SchemaPreset::Hal| schema_hal())
        };

        Ok(Expectations {
            status_code: self.status_code,
            time_ms: self.time_ms,
            content_type: self.content_type.clone(),
            json_schema,
            location: self.location.clone(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {0}: {1}")]
    Io(PathBuf, String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Schema error: {0}")]
    Schema(String),
    #[error("No config file found (.apicheck.toml, .apicheck.json, apicheck.toml)")]
    NotFound,
}
