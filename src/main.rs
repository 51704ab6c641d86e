use anyhow::Context;
use clap::Parser;
use roman_words::utils::{logger, validation::Validate};
use roman_words::{CalcEngine, CalcError, CliConfig, LocalStorage, RomanPipeline};
use std::io::Write;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            fail(&e);
        }
    };

    logger::init_cli_logger(cli.verbose, config.log_level.as_deref());
    tracing::info!("🚀 Starting roman-words");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let output_path = config.output_path.clone();
    let pipeline = RomanPipeline::new(LocalStorage::default(), config);
    let engine = CalcEngine::new(pipeline);

    if cli.dry_run {
        tracing::info!("Dry run: output is printed instead of written");
        let report = match engine.evaluate().await {
            Ok(report) => report,
            Err(e) => fail(&e),
        };
        std::io::stdout()
            .lock()
            .write_all(report.render().as_bytes())
            .context("failed to write output to stdout")?;
        return Ok(());
    }

    match engine.run().await {
        Ok(outcome) => {
            tracing::info!("✅ Processing complete");
            println!(
                "Processing complete. Check '{}' for results.",
                outcome.output_path
            );
        }
        // An unwritable output is reported, the run still completes.
        Err(e) if e.exit_code() == 0 => {
            log_failure(&e);
            println!("Processing complete. Check '{}' for results.", output_path);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn log_failure(e: &CalcError) {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
}

fn fail(e: &CalcError) -> ! {
    log_failure(e);
    std::process::exit(e.exit_code());
}
