use crate::core::processor;
use crate::core::{ConfigProvider, Pipeline, ProcessReport, Storage};
use crate::utils::error::{CalcError, Result};

/// Reads expression lines from the configured input, evaluates them and
/// writes one spelled-out line per input line to the configured output.
pub struct RomanPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RomanPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RomanPipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        let path = self.config.input_path();
        tracing::debug!("Reading input from: {}", path);

        // An unreadable input is reported and processed as empty.
        let bytes = match self.storage.read_file(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Error: Unable to open file {}. ({})", path, e);
                return Ok(String::new());
            }
        };

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::warn!("Input file {} is not valid UTF-8, decoding lossily", path);
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    async fn transform(&self, input: String) -> Result<ProcessReport> {
        Ok(processor::process_input(&input))
    }

    async fn load(&self, report: &ProcessReport) -> Result<String> {
        let path = self.config.output_path();
        let output = report.render();

        tracing::debug!("Writing {} bytes to: {}", output.len(), path);
        self.storage
            .write_file(path, output.as_bytes())
            .await
            .map_err(|e| match e {
                CalcError::IoError(source) => CalcError::OutputError {
                    path: path.to_string(),
                    source,
                },
                other => other,
            })?;

        Ok(path.to_string())
    }
}
