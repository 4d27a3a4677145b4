use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Routes library diagnostics to stderr so they never mix with command output.
///
/// `RUST_LOG` wins when set. Otherwise only warnings and errors are shown, or
/// everything from gameshelf at debug level with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "gameshelf=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(verbose)
        .without_time()
        .compact()
        .with_writer(std::io::stderr);

    // A second init (tests) is not an error worth reporting.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
