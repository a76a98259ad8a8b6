//! CLI adapter for the NiFi lifecycle controller.
//!
//! Thin command dispatch over `nifictl-runtime`; no lifecycle logic
//! lives here.

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
