use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is not defined
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "devguard=debug"
    } else {
        "warn"
    }
}

/// Initialize logging for the CLI
///
/// Logs always go to stderr without ANSI codes so stdout only carries the
/// status lines. `RUST_LOG` takes precedence over the default filter.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let result = fmt::Subscriber::builder()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();

    // If it fails, the logger is probably already initialized
    if let Err(e) = result {
        eprintln!("Warning: Logger initialization failed: {}", e);
        return;
    }

    tracing::debug!("devguard v{} logging initialized", crate::version());
}
