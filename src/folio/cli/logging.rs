use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides every other log setting.
pub(super) const LOG_ENV: &str = "FOLIO_LOG";

/// Picks the filter directive: `FOLIO_LOG`, then `--verbose`, then the configured level.
fn directive(env: Option<String>, verbose: bool, configured: &str) -> String {
    match env {
        Some(value) if !value.trim().is_empty() => value,
        _ if verbose => "debug".to_string(),
        _ => configured.to_string(),
    }
}

/// Installs the stderr subscriber. Stdout stays reserved for command output.
pub(super) fn init(verbose: bool, configured: &str) {
    let directive = directive(std::env::var(LOG_ENV).ok(), verbose, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
