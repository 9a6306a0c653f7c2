use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "STATEPATH_LOG";

/// The filter directive for the given CLI flags
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("statepath={level},statepath_core={level}"),
        (true, None) => "statepath=debug,statepath_core=debug".to_string(),
        (false, None) => "warn".to_string(),
    }
}

/// Install a stderr subscriber. `STATEPATH_LOG` overrides the CLI flags.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(filter_directive(verbose, log_level)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
