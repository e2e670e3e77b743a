//! Formats and writes the greeting line.

use std::io::Write;

use crate::error::GreetError;

/// Builds the greeting text for `target`, without a trailing newline.
#[must_use]
pub fn greeting(target: &str) -> String {
    format!("Hello {target}")
}

/// Writes `Hello {target}` followed by a newline and flushes `out`.
///
/// `target` is written verbatim; normalization happens before this point.
///
/// # Errors
///
/// Returns [`GreetError::Write`] if writing or flushing fails.
pub fn greet<W: Write>(out: &mut W, target: &str) -> Result<(), GreetError> {
    writeln!(out, "{}", greeting(target))?;
    out.flush()?;
    tracing::debug!(target_len = target.len(), "greeting written");
    Ok(())
}
