use crate::core::{Pipeline, ProcessReport};
use crate::utils::error::Result;
use std::time::Instant;

pub struct CalcEngine<P: Pipeline> {
    pipeline: P,
}

/// Where the output went and what was written there.
#[derive(Debug)]
pub struct RunOutcome {
    pub output_path: String,
    pub report: ProcessReport,
}

impl<P: Pipeline> CalcEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Read, evaluate and spell out every line without writing the output.
    pub async fn evaluate(&self) -> Result<ProcessReport> {
        let started = Instant::now();

        tracing::info!("Reading input...");
        let input = self.pipeline.extract().await?;
        tracing::debug!("Read {} bytes in {:?}", input.len(), started.elapsed());

        tracing::info!("Evaluating expressions...");
        let report = self.pipeline.transform(input).await?;
        let summary = report.summary();
        tracing::info!(
            "📊 Processed {} lines: {} results, {} invalid numerals, {} invalid formats",
            summary.lines,
            summary.results,
            summary.invalid_numerals,
            summary.invalid_formats
        );

        Ok(report)
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        let started = Instant::now();
        let report = self.evaluate().await?;

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(&report).await?;
        tracing::info!("📁 Output saved to: {} ({:?})", output_path, started.elapsed());

        Ok(RunOutcome {
            output_path,
            report,
        })
    }
}
