//! Satroute CLI library.
//!
//! Terminal styling and output formatting shared by the `satroute-cli`
//! subcommands.

pub mod output;
pub mod terminal;
