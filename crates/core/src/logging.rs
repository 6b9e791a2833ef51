use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initializes the tracing subscriber for the CLI.
///
/// Everything goes to stderr so example output on stdout stays clean.
/// The filter honors `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
