//! Diagnostic logging setup.
//!
//! Logs always go to stderr so stdout only ever carries the greeting.

use tracing::Level;

/// Installs a stderr `tracing` subscriber when `verbose` is set.
///
/// Without `verbose` nothing is installed and all events are dropped.
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init(verbose: bool) {
    if !verbose {
        return;
    }

    let installed = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("verbose logging enabled");
    }
}
