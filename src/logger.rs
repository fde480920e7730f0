//! Logger setup for the command-line binary.

/// Installs env_logger at `Info`, or `Debug` when `verbose` is set.
///
/// `RUST_LOG` still applies on top of the chosen level.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
