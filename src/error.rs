//! Error types for the greeting library.

use std::io;

use thiserror::Error;

/// Errors raised while emitting a greeting.
///
/// Argument errors are not listed here: clap reports those itself.
#[derive(Debug, Error)]
pub enum GreetError {
    /// The greeting could not be written to its destination.
    #[error("failed to write greeting: {0}")]
    Write(#[from] io::Error),
}
