pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT_PATH: &str = "input.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "Output.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "roman-words")]
#[command(about = "Evaluate Roman numeral arithmetic and spell the results in English")]
pub struct CliConfig {
    /// Input file with one `<numeral> <op> <numeral>` expression per line [default: input.txt]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output file receiving one line per input line [default: Output.txt]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Optional TOML config file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print the output to stdout instead of writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merge the config file (if any) under the command-line flags.
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file: {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        Ok(RunConfig::merge(self.input.clone(), self.output.clone(), file))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: String,
    pub log_level: Option<String>,
}

impl RunConfig {
    /// Explicit values win over the file; the file wins over the defaults.
    pub fn merge(input: Option<String>, output: Option<String>, file: TomlConfig) -> Self {
        let log_level = file.log_level().map(str::to_string);
        Self {
            input_path: input
                .or(file.io.input_path)
                .unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string()),
            output_path: output
                .or(file.io.output_path)
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            log_level,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::merge(None, None, TomlConfig::default())
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_distinct_paths(&self.input_path, &self.output_path)?;
        if let Some(level) = &self.log_level {
            validation::validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}
