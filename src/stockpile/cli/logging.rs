use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set. Otherwise warnings and errors are shown, or
/// everything from this crate down to debug with `--verbose`. Safe to call
/// more than once.
pub(super) fn init(verbose: bool) {
    let fallback = if verbose { "stockpile=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
