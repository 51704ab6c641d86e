use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Optional config file. Every field may be omitted and falls back to the
/// command-line defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub io: IoConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input_path: Option<String>,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| CalcError::ConfigError {
                message: format!(
                    "Unable to read config file {}: {}",
                    path.as_ref().display(),
                    e
                ),
            })?;
        Self::from_toml_str(&content)
    }

    /// Parse after substituting `${VAR}` references from the environment.
    /// Unset variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().map(|l| l.level.as_str())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.io.input_path {
            validation::validate_path("io.input_path", input)?;
        }
        if let Some(output) = &self.io.output_path {
            validation::validate_path("io.output_path", output)?;
        }
        if let Some(level) = self.log_level() {
            validation::validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}
