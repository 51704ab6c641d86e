use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` overrides the default filter,
/// and a `[logging] level` from the config file overrides the verbose flag.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let default_directive = match level {
        Some(level) => format!("roman_words={}", level),
        None if verbose => "roman_words=debug,info".to_string(),
        None => "roman_words=info".to_string(),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // try_init: a second call (tests, embedding) must not panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
