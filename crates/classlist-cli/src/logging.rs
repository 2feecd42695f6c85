// crates/classlist-cli/src/logging.rs - Tracing subscriber setup
//
// Logs go to stderr so they never mix with command output on stdout.
// Level precedence: --verbose, then the configured level (which already
// includes CLASSLIST_LOG), then "warn".

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn init(configured_level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { configured_level };
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Fails only if a global subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
