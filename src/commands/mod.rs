//! Command parsing and dispatch for the router CLI.
//!
//! Parsing and validation happen in the router against the declarative
//! grammar in [`definitions`]; handlers only run once a command has been
//! fully validated, so a rejected line never touches device state.

pub mod definitions;
pub mod error;
pub mod handlers;
pub mod help;
pub mod output;
pub mod router;
pub mod tokenizer;

pub use definitions::{commands_for, CommandDef, COMMANDS};
pub use error::CommandError;
pub use handlers::{dispatch, CommandContext, CommandResult};
pub use output::Response;
pub use router::{Command, CommandRouter};
pub use tokenizer::{tokenize, CommandLine};
