//! `greet-universe` - Greet the Universe from the command line.
//!
//! Parses one optional `--the-universe` flag, capitalizes it and prints
//! `Hello <Universe>`. The binary in `main.rs` wires these pieces together;
//! everything here can be reused without touching the process arguments.

pub mod cli;
pub mod error;
pub mod greeter;
pub mod logging;
pub mod universe;

pub use cli::{Args, Config, resolve_from};
pub use error::GreetError;
pub use greeter::{greet, greeting};
pub use universe::capitalize;
