//! CLI argument parsing using clap.

use std::ffi::OsString;

use clap::Parser;

use crate::universe::capitalize;

/// Value used when `--the-universe` is not given.
pub const DEFAULT_UNIVERSE: &str = "world";

/// Raw command-line arguments as produced by clap.
///
/// This is the parser output and is never modified after parsing.
/// Call [`Args::resolve`] to obtain the normalized [`Config`].
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "greet-universe", version, about = "Greet the Universe.", long_about = None)]
pub struct Args {
    /// Name your universe
    #[arg(long, default_value = DEFAULT_UNIVERSE)]
    pub the_universe: String,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved configuration handed to the greeter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capitalized greeting target.
    pub the_universe: String,
    /// Whether diagnostic logging is enabled.
    pub verbose: bool,
}

impl Args {
    /// Normalizes the parsed arguments into a new [`Config`].
    ///
    /// # Examples
    ///
    /// ```
    /// use clap::Parser;
    /// use greet_universe::cli::Args;
    ///
    /// let args = Args::parse_from(["greet-universe", "--the-universe=dumbledore"]);
    /// assert_eq!(args.resolve().the_universe, "Dumbledore");
    /// assert_eq!(args.the_universe, "dumbledore");
    /// ```
    #[must_use]
    pub fn resolve(&self) -> Config {
        Config {
            the_universe: capitalize(&self.the_universe),
            verbose: self.verbose,
        }
    }
}

/// Parses an explicit argument list and resolves it in one step.
///
/// The first item is the program name, as with [`std::env::args_os`].
/// Unlike [`Args::parse`], this never exits the process: help, version
/// and invalid input all come back as a [`clap::Error`].
///
/// # Errors
///
/// Returns the clap error when help or version output was requested or
/// when the arguments are not accepted.
pub fn resolve_from<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args).map(|args| args.resolve())
}
